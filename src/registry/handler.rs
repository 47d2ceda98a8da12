//! Transition handlers and per-state entry/exit hooks.

use crate::core::{Context, Stateful};

/// Side effect bound to one `(from, to)` pair.
///
/// Closures with the matching signature implement this trait, so most
/// registrations pass a closure. Implement it on a named type when a handler
/// needs its own configuration or is shared across several pairs.
pub trait TransitionHandler<O: Stateful>: Send + Sync {
    fn apply(
        &self,
        object: &mut O,
        ctx: &Context,
        from: &O::State,
        to: &O::State,
        args: &O::Args,
    ) -> Result<(), O::Error>;
}

impl<O, F> TransitionHandler<O> for F
where
    O: Stateful,
    F: Fn(&mut O, &Context, &O::State, &O::State, &O::Args) -> Result<(), O::Error> + Send + Sync,
{
    fn apply(
        &self,
        object: &mut O,
        ctx: &Context,
        from: &O::State,
        to: &O::State,
        args: &O::Args,
    ) -> Result<(), O::Error> {
        self(object, ctx, from, to, args)
    }
}

/// Side effect run whenever a state is entered or exited, whatever
/// transition caused it.
pub trait StateHook<O: Stateful>: Send + Sync {
    fn run(&self, object: &mut O, ctx: &Context, args: &O::Args) -> Result<(), O::Error>;
}

impl<O, F> StateHook<O> for F
where
    O: Stateful,
    F: Fn(&mut O, &Context, &O::Args) -> Result<(), O::Error> + Send + Sync,
{
    fn run(&self, object: &mut O, ctx: &Context, args: &O::Args) -> Result<(), O::Error> {
        self(object, ctx, args)
    }
}

pub(crate) type BoxedHandler<O> = Box<dyn TransitionHandler<O>>;
pub(crate) type BoxedHook<O> = Box<dyn StateHook<O>>;

/// Optional exit/entry hook pair of a single state.
///
/// Either side may be absent, meaning "no hook".
pub struct StateHooks<O: Stateful> {
    on_exit: Option<BoxedHook<O>>,
    on_enter: Option<BoxedHook<O>>,
}

impl<O: Stateful + 'static> StateHooks<O> {
    /// An empty pair.
    pub fn new() -> Self {
        Self {
            on_exit: None,
            on_enter: None,
        }
    }

    /// Set the hook run when leaving the state.
    pub fn exit<F>(self, hook: F) -> Self
    where
        F: Fn(&mut O, &Context, &O::Args) -> Result<(), O::Error> + Send + Sync + 'static,
    {
        self.exit_hook(hook)
    }

    /// Set the hook run when entering the state.
    pub fn enter<F>(self, hook: F) -> Self
    where
        F: Fn(&mut O, &Context, &O::Args) -> Result<(), O::Error> + Send + Sync + 'static,
    {
        self.enter_hook(hook)
    }

    /// Set the exit hook from a named [`StateHook`] implementation.
    pub fn exit_hook<H: StateHook<O> + 'static>(mut self, hook: H) -> Self {
        self.on_exit = Some(Box::new(hook));
        self
    }

    /// Set the entry hook from a named [`StateHook`] implementation.
    pub fn enter_hook<H: StateHook<O> + 'static>(mut self, hook: H) -> Self {
        self.on_enter = Some(Box::new(hook));
        self
    }

    pub fn on_exit(&self) -> Option<&dyn StateHook<O>> {
        self.on_exit.as_deref()
    }

    pub fn on_enter(&self) -> Option<&dyn StateHook<O>> {
        self.on_enter.as_deref()
    }

    pub(crate) fn set_exit(&mut self, hook: BoxedHook<O>) {
        self.on_exit = Some(hook);
    }

    pub(crate) fn set_enter(&mut self, hook: BoxedHook<O>) {
        self.on_enter = Some(hook);
    }
}

impl<O: Stateful + 'static> Default for StateHooks<O> {
    fn default() -> Self {
        Self::new()
    }
}
