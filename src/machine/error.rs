//! Errors returned by [`Machine::goto`](super::Machine::goto).

use thiserror::Error;

/// Errors that can occur during a transition.
///
/// Failures from the bound object, its hooks or its handlers are carried
/// unchanged in `source`. The engine performs no retries and no rollback.
#[derive(Debug, Error)]
pub enum GotoError<E: std::error::Error + 'static> {
    #[error("Transition from '{from}' to '{to}' not permitted")]
    NotPermitted { from: String, to: String },

    #[error("Exit hook of '{state}' failed: {source}")]
    ExitHook { state: String, source: E },

    #[error("Transition handler '{from}' -> '{to}' failed: {source}")]
    Handler { from: String, to: String, source: E },

    #[error("Entry hook of '{state}' failed: {source}")]
    EntryHook { state: String, source: E },

    #[error("Committing state '{state}' failed: {source}")]
    Commit { state: String, source: E },
}

impl<E: std::error::Error + 'static> GotoError<E> {
    pub fn is_not_permitted(&self) -> bool {
        matches!(self, Self::NotPermitted { .. })
    }

    /// Whether the failure happened after the source state's exit hook had
    /// already run.
    ///
    /// The object may then be between states: it has left the old one and
    /// the machine still reports the old one.
    pub fn is_partial(&self) -> bool {
        matches!(
            self,
            Self::Handler { .. } | Self::EntryHook { .. } | Self::Commit { .. }
        )
    }

    /// The original error raised by the object, hook or handler.
    pub fn into_source(self) -> Option<E> {
        match self {
            Self::NotPermitted { .. } => None,
            Self::ExitHook { source, .. }
            | Self::Handler { source, .. }
            | Self::EntryHook { source, .. }
            | Self::Commit { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, Error, PartialEq)]
    #[error("disk full")]
    struct DiskFull;

    #[test]
    fn not_permitted_names_both_states() {
        let err: GotoError<DiskFull> = GotoError::NotPermitted {
            from: "Offline".to_string(),
            to: "Online".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Transition from 'Offline' to 'Online' not permitted"
        );
        assert!(err.is_not_permitted());
        assert!(!err.is_partial());
        assert!(err.into_source().is_none());
    }

    #[test]
    fn hook_failures_keep_original_error() {
        let err = GotoError::EntryHook {
            state: "Online".to_string(),
            source: DiskFull,
        };

        assert_eq!(err.to_string(), "Entry hook of 'Online' failed: disk full");
        assert!(err.source().is_some());
        assert!(err.is_partial());
        assert_eq!(err.into_source(), Some(DiskFull));
    }

    #[test]
    fn exit_hook_failure_is_not_partial() {
        let err = GotoError::ExitHook {
            state: "Online".to_string(),
            source: DiskFull,
        };
        assert!(!err.is_partial());
        assert!(!err.is_not_permitted());
    }

    #[test]
    fn handler_and_commit_failures_are_partial() {
        let handler = GotoError::Handler {
            from: "A".to_string(),
            to: "B".to_string(),
            source: DiskFull,
        };
        let commit = GotoError::Commit {
            state: "B".to_string(),
            source: DiskFull,
        };

        assert!(handler.is_partial());
        assert!(commit.is_partial());
        assert_eq!(
            handler.to_string(),
            "Transition handler 'A' -> 'B' failed: disk full"
        );
    }
}
