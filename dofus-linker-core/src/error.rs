use thiserror::Error;

/// Errors raised while configuring a [`Linker`](crate::Linker).
///
/// Slug generation itself never fails; these only come from building the
/// pieces around it (settings, user-supplied selector patterns).
#[derive(Debug, Error)]
pub enum LinkerError {
    /// I/O error while reading the settings file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file exists but could not be parsed
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// A selector exception pattern failed to compile
    #[error("Invalid selector pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Unknown selector priority name
    #[error("Unknown priority '{0}' (expected heuristic, normalized or entity)")]
    UnknownPriority(String),
}

impl LinkerError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }

    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}
