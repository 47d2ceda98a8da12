//! Core State trait for state machine states.
//!
//! States are opaque identities. The engine only compares them and uses
//! them as map keys; `name` exists for diagnostics and logging.

use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: the machine caches the last committed state
/// - `Eq` + `Hash`: states key the transition and hook tables
/// - `Debug`: states must be debuggable for diagnostics
/// - `Send` + `Sync`: registries are shared process-wide
///
/// # Example
///
/// ```rust
/// use lifecycle_fsm::core::State;
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// enum Status {
///     Offline,
///     Online,
/// }
///
/// impl State for Status {
///     fn name(&self) -> &str {
///         match self {
///             Self::Offline => "Offline",
///             Self::Online => "Online",
///         }
///     }
/// }
///
/// assert_eq!(Status::Online.name(), "Online");
/// ```
pub trait State: Clone + Eq + Hash + Debug + Send + Sync {
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum TestState {
        Idle,
        Running,
        Stopped,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Idle => "Idle",
                Self::Running => "Running",
                Self::Stopped => "Stopped",
            }
        }
    }

    #[test]
    fn state_name_returns_correct_value() {
        assert_eq!(TestState::Idle.name(), "Idle");
        assert_eq!(TestState::Running.name(), "Running");
        assert_eq!(TestState::Stopped.name(), "Stopped");
    }

    #[test]
    fn string_states_name_themselves() {
        assert_eq!("draining".name(), "draining");
        assert_eq!(String::from("drained").name(), "drained");
    }

    #[test]
    fn states_are_usable_as_keys() {
        let mut seen = HashSet::new();
        assert!(seen.insert(TestState::Idle));
        assert!(seen.insert(TestState::Running));
        assert!(!seen.insert(TestState::Idle));
    }

    #[test]
    fn state_is_comparable() {
        let state1 = TestState::Running;
        let state2 = TestState::Running;
        let state3 = TestState::Stopped;

        assert_eq!(state1, state2);
        assert_ne!(state1, state3);
    }
}
