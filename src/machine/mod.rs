//! Machine that drives one object's lifecycle through a registry.
//!
//! A [`Machine`] pairs a borrowed [`Registry`] with a borrowed
//! [`Stateful`] object and mediates every state change through
//! [`goto`](Machine::goto). The object keeps the authoritative state; the
//! machine caches the last committed value and resynchronizes it after
//! each transition.

mod error;
mod status;

pub use error::GotoError;
pub use status::{MachineMetadata, MachineStatus};

use crate::core::{Context, State, Stateful};
use crate::registry::Registry;
use chrono::Utc;
use tracing::{debug, trace, warn};
use uuid::Uuid;

/// A live machine bound to one object.
///
/// A machine mutates its cached state in place and takes no locks; callers
/// driving one machine from several threads must synchronize externally.
pub struct Machine<'r, 'o, O: Stateful> {
    id: Uuid,
    state: O::State,
    registry: &'r Registry<O>,
    object: &'o mut O,
    metadata: MachineMetadata,
}

impl<'r, 'o, O: Stateful + 'static> Machine<'r, 'o, O> {
    /// Bind a machine starting at `start` and notify the object.
    pub fn new(registry: &'r Registry<O>, start: O::State, object: &'o mut O) -> Self {
        let id = Uuid::new_v4();
        object.on_init_with_machine(id, registry);
        debug!(machine = %id, state = start.name(), "machine created");
        Self {
            id,
            state: start,
            registry,
            object,
            metadata: MachineMetadata::default(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The last committed state.
    pub fn state(&self) -> &O::State {
        &self.state
    }

    pub fn object(&self) -> &O {
        &*self.object
    }

    pub fn registry(&self) -> &'r Registry<O> {
        self.registry
    }

    /// Whether `goto(target)` would pass the permission check.
    pub fn can_goto(&self, target: &O::State) -> bool {
        self.registry.can_transition(&self.state, target)
    }

    /// Re-read the object's authoritative state into the cache.
    pub fn sync(&mut self) -> &O::State {
        self.state = self.object.state();
        &self.state
    }

    pub fn status(&self) -> MachineStatus {
        MachineStatus {
            id: self.id,
            state: self.state.name().to_string(),
            metadata: self.metadata.clone(),
        }
    }

    /// Move the object to `target`.
    ///
    /// Steps, each aborting the transition on failure:
    /// 1. `target` equal to the cached state is a no-op success.
    /// 2. The pair must be registered, or `target` must be special.
    /// 3. The current state's exit hook runs.
    /// 4. The pair's handler runs, if one is registered.
    /// 5. The target's entry hook runs.
    /// 6. The object commits `target` through `set_state`; the cache then
    ///    takes whatever state the object reports, which differs from
    ///    `target` when the object redirected the move.
    ///
    /// There is no rollback. A failure in steps 4-6 leaves the object after
    /// its exit hook with the cache still at the old state; see
    /// [`GotoError::is_partial`].
    pub fn goto(
        &mut self,
        target: O::State,
        ctx: &Context,
        args: &O::Args,
    ) -> Result<(), GotoError<O::Error>> {
        if target == self.state {
            trace!(machine = %self.id, state = target.name(), "already in target state");
            return Ok(());
        }

        let registry = self.registry;
        let from = self.state.clone();
        let (handler, permitted) = registry.handler(&from, &target);
        if !permitted && !registry.is_special(&target) {
            warn!(
                machine = %self.id,
                from = from.name(),
                to = target.name(),
                "transition not permitted"
            );
            self.metadata.rejected += 1;
            return Err(GotoError::NotPermitted {
                from: from.name().to_string(),
                to: target.name().to_string(),
            });
        }

        if let Some(exit) = registry.state_hooks(&from).and_then(|hooks| hooks.on_exit()) {
            trace!(machine = %self.id, state = from.name(), "running exit hook");
            if let Err(source) = exit.run(self.object, ctx, args) {
                self.metadata.failed += 1;
                return Err(GotoError::ExitHook {
                    state: from.name().to_string(),
                    source,
                });
            }
        }

        if let Some(handler) = handler {
            trace!(machine = %self.id, from = from.name(), to = target.name(), "running handler");
            if let Err(source) = handler.apply(self.object, ctx, &from, &target, args) {
                return Err(self.partial_failure(GotoError::Handler {
                    from: from.name().to_string(),
                    to: target.name().to_string(),
                    source,
                }));
            }
        }

        if let Some(enter) = registry.state_hooks(&target).and_then(|hooks| hooks.on_enter()) {
            trace!(machine = %self.id, state = target.name(), "running entry hook");
            if let Err(source) = enter.run(self.object, ctx, args) {
                return Err(self.partial_failure(GotoError::EntryHook {
                    state: target.name().to_string(),
                    source,
                }));
            }
        }

        if let Err(source) = self.object.set_state(ctx, target.clone()) {
            return Err(self.partial_failure(GotoError::Commit {
                state: target.name().to_string(),
                source,
            }));
        }

        let committed = self.object.state();
        if committed != target {
            debug!(
                machine = %self.id,
                requested = target.name(),
                committed = committed.name(),
                "object redirected transition"
            );
        }
        debug!(machine = %self.id, from = from.name(), to = committed.name(), "transition committed");

        self.state = committed;
        self.metadata.transitions += 1;
        self.metadata.updated_at = Utc::now();
        Ok(())
    }

    fn partial_failure(&mut self, err: GotoError<O::Error>) -> GotoError<O::Error> {
        warn!(
            machine = %self.id,
            state = self.state.name(),
            error = %err,
            "transition failed after exit hook; object may be between states"
        );
        self.metadata.failed += 1;
        err
    }
}
