//! Capability contract for objects whose lifecycle a machine drives.

use super::context::Context;
use super::state::State;
use crate::registry::Registry;
use uuid::Uuid;

/// An externally owned object that holds the authoritative state.
///
/// The machine only mirrors the state. After every transition it asks the
/// object to commit the target through [`set_state`](Stateful::set_state) and
/// then re-reads [`state`](Stateful::state), so the object may veto or
/// redirect a move inside its own `set_state`.
///
/// # Example
///
/// ```rust
/// use lifecycle_fsm::core::{Context, Stateful};
/// use lifecycle_fsm::state_enum;
///
/// state_enum! {
///     pub enum Status {
///         Offline = 0,
///         Online = 10,
///     }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("mission error")]
/// struct MissionError;
///
/// struct Mission {
///     status: Status,
/// }
///
/// impl Stateful for Mission {
///     type State = Status;
///     type Args = ();
///     type Error = MissionError;
///
///     fn state(&self) -> Status {
///         self.status
///     }
///
///     fn set_state(&mut self, _ctx: &Context, state: Status) -> Result<(), MissionError> {
///         self.status = state;
///         Ok(())
///     }
/// }
/// ```
pub trait Stateful: Sized {
    /// The state identity type.
    type State: State;

    /// Payload handed to hooks and handlers on every transition.
    ///
    /// Use `()` when transitions carry no data.
    type Args;

    /// Error returned by `set_state`, hooks and handlers.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Report the current authoritative state.
    fn state(&self) -> Self::State;

    /// Commit a new state, or fail.
    fn set_state(&mut self, ctx: &Context, state: Self::State) -> Result<(), Self::Error>;

    /// Called exactly once when a machine is bound to this object, before
    /// its first transition.
    ///
    /// Default implementation does nothing.
    fn on_init_with_machine(&mut self, _machine_id: Uuid, _registry: &Registry<Self>) {}
}
