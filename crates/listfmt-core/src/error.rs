//! Unified error handling for listfmt Core.
//!
//! Rendering itself never fails. The only errors come from choosing a
//! strategy: a notation name nobody knows, or a runtime processor asked to
//! render before a strategy was selected.

use thiserror::Error;

use crate::notation::Notation;

/// Root error type for listfmt Core operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A notation name did not match any known notation.
    ///
    /// Raised when a string is parsed into a [`Notation`]. The enum itself is
    /// closed, so a `Notation` value can always be turned into a strategy.
    #[error("Unsupported notation '{notation}'")]
    UnsupportedNotation { notation: String },

    /// The runtime processor was asked to render before a strategy was set.
    #[error("No list strategy selected; call set_notation before append_list")]
    NoStrategySelected,
}

impl ListError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UnsupportedNotation { notation } => {
                let mut suggestions = vec![
                    format!("'{}' is not a supported notation", notation),
                    "Supported notations:".into(),
                ];
                for n in Notation::ALL {
                    suggestions.push(format!("  • {:<8} - {}", n.as_str(), n.description()));
                }
                suggestions.push("Example: listfmt render --notation tagged foo bar".into());
                suggestions
            }
            Self::NoStrategySelected => vec![
                "Select a notation before rendering".into(),
                "Use TextProcessor::with_notation or call set_notation first".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnsupportedNotation { .. } => ErrorCategory::Validation,
            Self::NoStrategySelected => ErrorCategory::Usage,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input value (e.g. an unknown notation name).
    Validation,
    /// The API was called out of order. A bug in the caller.
    Usage,
}

/// Convenient result type alias.
pub type ListResult<T> = Result<T, ListError>;
