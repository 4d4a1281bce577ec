use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (for display layering)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The requested theme name violates package-registry naming rules.
    ///
    /// Never corrected silently; the user must supply a valid name.
    #[error("invalid theme name '{name}': {reason}")]
    InvalidThemeName { name: String, reason: String },

    /// The starter string could not be understood at all (e.g. empty).
    #[error("invalid starter source '{input}': {reason}")]
    InvalidSource { input: String, reason: String },

    /// An unknown build mode string.
    #[error("unknown build mode '{input}' (expected 'development' or 'production')")]
    InvalidBuildMode { input: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidThemeName { reason, .. } => vec![
                format!("Naming rule violated: {}", reason),
                "Use lowercase letters, digits, hyphens, dots and underscores".into(),
                "Names may not start with '.' or '_' and may not contain spaces".into(),
                "Examples: my-theme, starter-theme, theme2".into(),
            ],
            Self::InvalidSource { .. } => vec![
                "Pass a hosted repository as owner/name (optionally #branch-or-commit)".into(),
                "Or pass the path of an existing local theme directory".into(),
                "Example: slate new my-theme shopify/starter-theme#v1.0".into(),
            ],
            Self::InvalidBuildMode { .. } => vec![
                "Use 'development' or 'production'".into(),
                "Example: slate build --mode production".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidThemeName { .. }
            | Self::InvalidSource { .. }
            | Self::InvalidBuildMode { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    External,
    Internal,
}
