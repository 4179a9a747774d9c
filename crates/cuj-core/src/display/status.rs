//! Status lines reported back to the user after each intent.

use std::fmt;

/// Outcome of a single intent, formatted as one status line.
///
/// Store operations cannot fail, but an intent can still leave the journey
/// untouched (unknown step id, last step protected from removal). Those are
/// reported as [`OperationStatus::unchanged`] rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Success(String),
    Unchanged(String),
    Failure(String),
}

impl OperationStatus {
    pub fn success(message: impl Into<String>) -> Self {
        OperationStatus::Success(message.into())
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        OperationStatus::Unchanged(message.into())
    }

    pub fn failure(message: impl Into<String>) -> Self {
        OperationStatus::Failure(message.into())
    }

    /// Picks success or unchanged from a store operation's result.
    pub fn from_outcome(
        changed: bool,
        success: impl Into<String>,
        unchanged: impl Into<String>,
    ) -> Self {
        if changed {
            Self::success(success)
        } else {
            Self::unchanged(unchanged)
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, OperationStatus::Failure(_))
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationStatus::Success(message) => writeln!(f, "Success: {message}"),
            OperationStatus::Unchanged(message) => writeln!(f, "No change: {message}"),
            OperationStatus::Failure(message) => writeln!(f, "Error: {message}"),
        }
    }
}
