//! Fluent builders for registering transitions.
//!
//! The source and destination are threaded through the builder values
//! rather than stored on the registry, so `to` can only follow `from` and
//! `then` can only follow `to`.

use super::handler::TransitionHandler;
use super::Registry;
use crate::core::{Context, Stateful};

/// Builder with a selected source state.
///
/// Returned by [`Registry::from`].
pub struct FromBuilder<'a, O: Stateful> {
    registry: &'a mut Registry<O>,
    from: O::State,
}

impl<'a, O: Stateful + 'static> FromBuilder<'a, O> {
    pub(crate) fn new(registry: &'a mut Registry<O>, from: O::State) -> Self {
        registry.rules.entry(from.clone()).or_default();
        Self { registry, from }
    }

    /// Permit `from -> state` with no handler.
    pub fn to(self, state: O::State) -> ToBuilder<'a, O> {
        self.registry
            .rules
            .entry(self.from.clone())
            .or_default()
            .insert(state.clone(), None);
        ToBuilder {
            registry: self.registry,
            from: self.from,
            to: state,
        }
    }

    /// Select another source state.
    pub fn from(self, state: O::State) -> FromBuilder<'a, O> {
        FromBuilder::new(self.registry, state)
    }

    /// Hand the registry back for non-transition configuration.
    pub fn done(self) -> &'a mut Registry<O> {
        self.registry
    }
}

/// Builder with a selected `(from, to)` pair.
///
/// Returned by [`FromBuilder::to`]. The pair is already registered as
/// permitted; [`then`](ToBuilder::then) attaches its handler.
pub struct ToBuilder<'a, O: Stateful> {
    registry: &'a mut Registry<O>,
    from: O::State,
    to: O::State,
}

impl<'a, O: Stateful + 'static> ToBuilder<'a, O> {
    /// Attach a handler closure to the selected pair, replacing any previous
    /// one.
    pub fn then<F>(self, handler: F) -> FromBuilder<'a, O>
    where
        F: Fn(&mut O, &Context, &O::State, &O::State, &O::Args) -> Result<(), O::Error>
            + Send
            + Sync
            + 'static,
    {
        self.then_handler(handler)
    }

    /// Attach a named [`TransitionHandler`] to the selected pair.
    pub fn then_handler<H: TransitionHandler<O> + 'static>(self, handler: H) -> FromBuilder<'a, O> {
        self.registry
            .rules
            .entry(self.from.clone())
            .or_default()
            .insert(self.to, Some(Box::new(handler)));
        FromBuilder {
            registry: self.registry,
            from: self.from,
        }
    }

    /// Permit another destination from the same source.
    pub fn to(self, state: O::State) -> ToBuilder<'a, O> {
        FromBuilder {
            registry: self.registry,
            from: self.from,
        }
        .to(state)
    }

    /// Select another source state.
    pub fn from(self, state: O::State) -> FromBuilder<'a, O> {
        FromBuilder::new(self.registry, state)
    }

    /// Hand the registry back for non-transition configuration.
    pub fn done(self) -> &'a mut Registry<O> {
        self.registry
    }
}
