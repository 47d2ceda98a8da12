//! Transition and hook registry.
//!
//! A [`Registry`] is process-wide configuration: a two-level table
//! `from -> to -> handler`, a set of special destination states, and the
//! per-state entry/exit hooks. It is built once at setup time and then
//! shared, read-only, by every [`Machine`](crate::machine::Machine) created
//! from it. Machines borrow the registry, so it cannot be mutated while any
//! of them is alive.
//!
//! # Example
//!
//! ```rust
//! use lifecycle_fsm::core::{Context, Stateful};
//! use lifecycle_fsm::registry::{Registry, StateHooks};
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
//! registry
//!     .from(Status::Online)
//!     .to(Status::Offline)
//!     .then(|_mission, _ctx, _from, _to, _args| Ok(()));
//! registry.set_state_funcs(
//!     Status::Offline,
//!     StateHooks::<Mission>::new().enter(|_mission, _ctx, _args| Ok(())),
//! );
//!
//! assert!(registry.handler(&Status::Online, &Status::Offline).1);
//! assert!(!registry.handler(&Status::Offline, &Status::Online).1);
//! ```

mod builder;
mod handler;

pub use builder::{FromBuilder, ToBuilder};
pub use handler::{StateHook, StateHooks, TransitionHandler};

use crate::core::{Context, Stateful};
use crate::machine::Machine;
use handler::BoxedHandler;
use std::collections::{HashMap, HashSet};

/// Registry of permitted transitions, special states and state hooks.
pub struct Registry<O: Stateful> {
    pub(crate) rules: HashMap<O::State, HashMap<O::State, Option<BoxedHandler<O>>>>,
    special: HashSet<O::State>,
    hooks: HashMap<O::State, StateHooks<O>>,
}

impl<O: Stateful + 'static> Registry<O> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: HashMap::new(),
            special: HashSet::new(),
            hooks: HashMap::new(),
        }
    }

    /// Select `state` as the source of the transitions that follow.
    pub fn from(&mut self, state: O::State) -> FromBuilder<'_, O> {
        FromBuilder::new(self, state)
    }

    /// Register `from -> to` in one call, with or without a handler.
    pub fn add_transition(
        &mut self,
        from: O::State,
        to: O::State,
        handler: Option<Box<dyn TransitionHandler<O>>>,
    ) -> &mut Self {
        self.rules.entry(from).or_default().insert(to, handler);
        self
    }

    /// Mark `state` as reachable from any source.
    ///
    /// Hooks still run when a special state is entered.
    pub fn special(&mut self, state: O::State) -> &mut Self {
        self.special.insert(state);
        self
    }

    /// Set or replace both hooks of `state`.
    pub fn set_state_funcs(&mut self, state: O::State, hooks: StateHooks<O>) -> &mut Self {
        self.hooks.insert(state, hooks);
        self
    }

    /// Set or replace only the exit hook of `state`.
    pub fn on_exit<F>(&mut self, state: O::State, hook: F) -> &mut Self
    where
        F: Fn(&mut O, &Context, &O::Args) -> Result<(), O::Error> + Send + Sync + 'static,
    {
        self.hooks.entry(state).or_default().set_exit(Box::new(hook));
        self
    }

    /// Set or replace only the entry hook of `state`.
    pub fn on_enter<F>(&mut self, state: O::State, hook: F) -> &mut Self
    where
        F: Fn(&mut O, &Context, &O::Args) -> Result<(), O::Error> + Send + Sync + 'static,
    {
        self.hooks.entry(state).or_default().set_enter(Box::new(hook));
        self
    }

    /// Look up the rule for `from -> to`.
    ///
    /// Returns the handler, if any, and whether the pair is permitted. A
    /// self-transition is always permitted and never has a handler. Special
    /// states are not consulted here; see [`is_special`](Registry::is_special).
    pub fn handler(
        &self,
        from: &O::State,
        to: &O::State,
    ) -> (Option<&dyn TransitionHandler<O>>, bool) {
        if from == to {
            return (None, true);
        }
        match self.rules.get(from).and_then(|targets| targets.get(to)) {
            Some(handler) => (handler.as_deref(), true),
            None => (None, false),
        }
    }

    pub fn is_special(&self, state: &O::State) -> bool {
        self.special.contains(state)
    }

    /// Hooks registered for `state`, if any.
    pub fn state_hooks(&self, state: &O::State) -> Option<&StateHooks<O>> {
        self.hooks.get(state)
    }

    /// Whether a machine at `from` may go to `to`.
    pub fn can_transition(&self, from: &O::State, to: &O::State) -> bool {
        self.handler(from, to).1 || self.is_special(to)
    }

    /// Bind a machine to `object`, starting at the object's reported state.
    pub fn machine<'r, 'o>(&'r self, object: &'o mut O) -> Machine<'r, 'o, O> {
        let start = object.state();
        Machine::new(self, start, object)
    }

    /// Bind a machine to `object` with an explicit starting state.
    pub fn machine_at<'r, 'o>(&'r self, start: O::State, object: &'o mut O) -> Machine<'r, 'o, O> {
        Machine::new(self, start, object)
    }
}

impl<O: Stateful + 'static> Default for Registry<O> {
    fn default() -> Self {
        Self::new()
    }
}
