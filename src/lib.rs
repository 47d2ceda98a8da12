//! Lifecycle FSM: a table-driven state machine for externally owned objects
//!
//! A [`Registry`] holds the permitted transitions `from -> to`, each with an
//! optional handler, a set of special states reachable from anywhere, and
//! per-state entry/exit hooks. A [`Machine`] binds that registry to one
//! object implementing [`Stateful`] and drives it with
//! [`goto`](Machine::goto).
//!
//! # Core Concepts
//!
//! - **State**: opaque comparable identity via the `State` trait
//! - **Registry**: built once at setup time, then shared read-only
//! - **Machine**: per-object driver that mirrors the object's state
//! - **Context**: cancellation and deadline forwarded to every hook
//!
//! # Example
//!
//! ```rust
//! use lifecycle_fsm::{Context, Registry, Stateful};
//! use lifecycle_fsm::state_enum;
//!
//! state_enum! {
//!     pub enum Status {
//!         Offline = 0,
//!         Online = 10,
//!     }
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("mission error")]
//! struct MissionError;
//!
//! struct Mission {
//!     status: Status,
//! }
//!
//! impl Stateful for Mission {
//!     type State = Status;
//!     type Args = ();
//!     type Error = MissionError;
//!
//!     fn state(&self) -> Status {
//!         self.status
//!     }
//!
//!     fn set_state(&mut self, _ctx: &Context, state: Status) -> Result<(), MissionError> {
//!         self.status = state;
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = Registry::<Mission>::new();
//! registry.from(Status::Online).to(Status::Offline);
//!
//! let mut mission = Mission { status: Status::Online };
//! let mut machine = registry.machine(&mut mission);
//!
//! machine.goto(Status::Offline, &Context::background(), &()).unwrap();
//! assert_eq!(machine.state(), &Status::Offline);
//!
//! let err = machine.goto(Status::Online, &Context::background(), &()).unwrap_err();
//! assert!(err.is_not_permitted());
//! ```

pub mod core;
pub mod machine;
mod macros;
pub mod registry;

// Re-export commonly used types
pub use crate::core::{Context, ContextError, State, Stateful};
pub use machine::{GotoError, Machine, MachineStatus};
pub use registry::{Registry, StateHooks, TransitionHandler};
