//! # Wizard Configuration
//!
//! Per-deployment tuning loaded from TOML:
//!
//! ```toml
//! max_depth = 8
//!
//! [copy.bundlePlan]
//! title = "Go Premium"
//! description = "Every module, one price"
//! ```
//!
//! Copy overrides only apply to views that do not take a selection; the
//! header of a detail view is always derived from the selected item.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::WizardError;
use crate::flow::ViewCopy;
use crate::view::WizardView;

/// Replacement header copy for one view.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyOverride {
    /// Replacement title; keeps the flow's title when absent
    #[serde(default)]
    pub title: Option<String>,
    /// Replacement description; keeps the flow's description when absent
    #[serde(default)]
    pub description: Option<String>,
}

impl CopyOverride {
    /// Apply this override on top of derived copy.
    #[must_use]
    pub fn apply(&self, mut copy: ViewCopy) -> ViewCopy {
        if let Some(title) = &self.title {
            copy.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            copy.description.clone_from(description);
        }
        copy
    }
}

/// Wizard configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WizardConfig {
    /// Maximum history depth, root included. Unbounded when absent.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Header copy overrides keyed by view key.
    #[serde(default)]
    pub copy: BTreeMap<String, CopyOverride>,
}

impl WizardConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, WizardError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, WizardError> {
        let content = std::fs::read_to_string(path).map_err(|source| WizardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), overrides = config.copy.len(), "Loaded wizard config");
        Ok(config)
    }

    /// Check this configuration against the views of flow `V`.
    pub fn validate_for<V: WizardView>(&self) -> Result<(), WizardError> {
        if let Some(depth) = self.max_depth {
            if depth < 2 {
                return Err(WizardError::invalid_config(format!(
                    "max_depth must be at least 2, got {depth}"
                )));
            }
        }

        for (key, copy) in &self.copy {
            let view = V::from_key(key).ok_or_else(|| WizardError::unknown_view(key.as_str()))?;
            if view.takes_selection() {
                return Err(WizardError::invalid_config(format!(
                    "view `{key}` derives its copy from the selection and cannot be overridden"
                )));
            }
            let blank = |value: &Option<String>| value.as_deref().is_some_and(|s| s.trim().is_empty());
            if blank(&copy.title) || blank(&copy.description) {
                return Err(WizardError::invalid_config(format!(
                    "copy override for `{key}` contains an empty string"
                )));
            }
        }
        Ok(())
    }

    /// Depth bound in the form the navigation stack expects.
    pub fn depth_bound(&self) -> Option<NonZeroUsize> {
        self.max_depth.and_then(NonZeroUsize::new)
    }

    /// Override registered for `view`, if any.
    pub fn override_for<V: WizardView>(&self, view: V) -> Option<&CopyOverride> {
        if view.takes_selection() {
            return None;
        }
        self.copy.get(view.key())
    }
}
