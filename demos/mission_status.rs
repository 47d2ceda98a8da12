//! Mission Status Lifecycle
//!
//! This example drives a mission between Online, Degraded and Offline.
//!
//! Key concepts:
//! - Process-wide registry built once behind a `LazyLock`
//! - Entry/exit hooks and a transition handler
//! - A special state reachable from anywhere
//! - A mission that vetoes going online while grounded
//!
//! Run with: cargo run --example mission_status

use lifecycle_fsm::state_enum;
use lifecycle_fsm::{Context, Registry, StateHooks, Stateful};
use std::sync::LazyLock;
use std::time::Duration;
use tracing::info;

state_enum! {
    pub enum Status {
        Offline = 0,
        Degraded = 5,
        Online = 10,
    }
}

#[derive(Debug, thiserror::Error)]
enum MissionError {
    #[error("mission {0} lost telemetry")]
    Telemetry(String),
}

struct Report {
    reason: &'static str,
}

struct Mission {
    name: String,
    status: Status,
    grounded: bool,
}

impl Stateful for Mission {
    type State = Status;
    type Args = Report;
    type Error = MissionError;

    fn state(&self) -> Status {
        self.status
    }

    fn set_state(&mut self, _ctx: &Context, state: Status) -> Result<(), MissionError> {
        // Grounded missions stay degraded instead of going online.
        self.status = if self.grounded && state == Status::Online {
            Status::Degraded
        } else {
            state
        };
        Ok(())
    }
}

static REGISTRY: LazyLock<Registry<Mission>> = LazyLock::new(|| {
    let mut registry = Registry::<Mission>::new();
    registry
        .from(Status::Online)
        .to(Status::Degraded)
        .then(|mission, ctx, _, _, report| {
            ctx.check()
                .map_err(|_| MissionError::Telemetry(mission.name.clone()))?;
            info!(mission = %mission.name, reason = report.reason, "degrading");
            Ok(())
        })
        .from(Status::Degraded)
        .to(Status::Online);
    registry.special(Status::Offline);
    registry.set_state_funcs(
        Status::Offline,
        StateHooks::<Mission>::new()
            .enter(|mission, _, report| {
                info!(mission = %mission.name, reason = report.reason, "entered offline");
                Ok(())
            })
            .exit(|mission, _, _| {
                info!(mission = %mission.name, "leaving offline");
                Ok(())
            }),
    );
    registry
});

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Mission Status Lifecycle ===\n");

    let ctx = Context::background().with_timeout(Duration::from_secs(5));
    let mut mission = Mission {
        name: "apollo".to_string(),
        status: Status::Online,
        grounded: false,
    };
    let mut machine = REGISTRY.machine(&mut mission);

    let steps = [
        (Status::Degraded, "sensor drift"),
        (Status::Online, "sensors recalibrated"),
        (Status::Degraded, "sensor drift again"),
        (Status::Offline, "operator stop"),
        (Status::Online, "restart without rule"),
    ];

    for (target, reason) in steps {
        match machine.goto(target, &ctx, &Report { reason }) {
            Ok(()) => println!("  -> {:?} ({})", machine.state(), reason),
            Err(err) => println!("  x  {} ({})", err, reason),
        }
    }

    println!("\nStatus: {:?}", machine.status());

    println!("\nGrounded mission:");
    let mut grounded = Mission {
        name: "gemini".to_string(),
        status: Status::Degraded,
        grounded: true,
    };
    let mut machine = REGISTRY.machine(&mut grounded);
    if let Err(err) = machine.goto(Status::Online, &ctx, &Report { reason: "launch" }) {
        println!("  x  {}", err);
    }
    println!("  requested Online, committed {:?}", machine.state());

    println!("\n=== Example Complete ===");
}
