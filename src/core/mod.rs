//! Core state machine types.
//!
//! This module contains the vocabulary shared by the registry and the
//! machine:
//! - State identities via the `State` trait
//! - The `Context` forwarded through every transition
//! - The `Stateful` capability contract of the driven object

mod context;
mod state;
mod stateful;

pub use context::{Context, ContextError};
pub use state::State;
pub use stateful::Stateful;
