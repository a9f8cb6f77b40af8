//! Common error infrastructure for game-core.
//!
//! Domain errors (`StateError`, `MoveError`, `RuleError`, ...) live next to
//! the code that raises them. This module only provides the shared severity
//! classification so hosts can decide whether to keep the session running.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the input is simply refused (a wall, the viewport edge)
/// - **Validation**: a rule or bootstrap refers to something that does not exist
/// - **Internal**: a state invariant was about to break
/// - **Fatal**: the session cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Refused input. The world is unchanged and play continues.
    Recoverable,

    /// Content defect, e.g. a rule pointing outside the map.
    Validation,

    /// Unexpected state inconsistency. Indicates a bug.
    Internal,

    /// Session over or missing collaborators.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all game-core errors.
///
/// - All error enums implement this trait
/// - Use `#[derive(thiserror::Error)]` for the Display/Error impl
/// - Classify severity by recoverability, not by impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Static identifier for the variant, handy in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
