//! Wizard errors
//!
//! Navigation itself is total. These errors only cover the edges where
//! outside input enters the engine: configuration files, view keys coming
//! from scripts, and incomplete render registries.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised at the configuration and registry boundaries.
#[derive(Debug, Error)]
pub enum WizardError {
    /// A view has no render function in its registry.
    #[error("no renderer registered for view `{view}`")]
    UnregisteredView {
        /// Key of the missing view
        view: &'static str,
    },

    /// A view key does not name any view of the flow.
    #[error("unknown view key `{key}`")]
    UnknownView {
        /// The offending key
        key: String,
    },

    /// Configuration values are out of range or inconsistent.
    #[error("invalid wizard config: {reason}")]
    InvalidConfig {
        /// Human readable reason
        reason: String,
    },

    /// Configuration file could not be read.
    #[error("failed to read config file {path}: {source}")]
    ConfigRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`crate::WizardConfig`].
    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl WizardError {
    /// Create an unknown-view error.
    pub fn unknown_view(key: impl Into<String>) -> Self {
        Self::UnknownView { key: key.into() }
    }

    /// Create an invalid-config error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Check if the error was caused by user-editable input (config or script).
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self, Self::UnregisteredView { .. })
    }
}
