//! Search errors

use thiserror::Error;

/// Error type raised by caller-supplied callbacks.
///
/// The engine never inspects these; they travel back to the caller inside
/// [`SearchError::Callback`] and can be downcast to their concrete type.
pub type CallbackError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which callback raised a [`SearchError::Callback`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackStage {
    /// The goal predicate
    Goal,
    /// Edge enumeration
    EdgeSource,
    /// Edge cost lookup
    EdgeCost,
    /// Heuristic estimate
    Heuristic,
}

impl std::fmt::Display for CallbackStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Goal => write!(f, "goal"),
            Self::EdgeSource => write!(f, "edge source"),
            Self::EdgeCost => write!(f, "edge cost"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Errors that terminate a search
#[derive(Debug, Error)]
pub enum SearchError {
    /// The frontier ran out before any node satisfied the goal
    #[error("No path to goal")]
    NoPathToGoal,

    /// A callback failed; its error is reported unchanged
    #[error("{source}")]
    Callback {
        stage: CallbackStage,
        #[source]
        source: CallbackError,
    },

    /// The caller-configured expansion budget was used up
    #[error("Expansion limit of {0} nodes reached")]
    ExpansionLimit(usize),
}

impl SearchError {
    pub(crate) fn callback(stage: CallbackStage) -> impl FnOnce(CallbackError) -> Self {
        move |source| Self::Callback { stage, source }
    }

    pub fn is_no_path(&self) -> bool {
        matches!(self, Self::NoPathToGoal)
    }

    /// The stage that failed, for callback errors
    pub fn stage(&self) -> Option<CallbackStage> {
        match self {
            Self::Callback { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    /// Recover the error raised by a callback
    pub fn into_callback_error(self) -> Option<CallbackError> {
        match self {
            Self::Callback { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type for search operations
pub type SearchOutcome<T> = Result<T, SearchError>;
