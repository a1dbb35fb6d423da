//! # Scripted Sessions
//!
//! Drives a wizard from a TOML script, acting as the host would: it
//! forwards clicks, honors close requests by flipping the open flag, and
//! records a JSON snapshot after every step.
//!
//! ```toml
//! flow = "premium"
//!
//! [[steps]]
//! action = "open"
//!
//! [[steps]]
//! action = "navigate"
//! view = "moduleDetail"
//! selection = "messaging"
//!
//! [[steps]]
//! action = "back"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use hinge_wizard::{BackOutcome, WizardConfig, WizardController, WizardError, WizardView};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::checkout::UpgradeHandler;
use crate::create_actions::{CreateActionView, CreateActionsFlow, CreateActionsModal};
use crate::premium::{ModuleCatalog, ModuleId, PremiumCenter, PremiumView};

/// Errors from loading or running a script.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Wizard configuration or view lookup failed.
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Script file could not be read.
    #[error("failed to read script {path}: {source}")]
    ScriptRead {
        /// Path that was read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Script is not valid TOML.
    #[error("failed to parse script: {0}")]
    ScriptParse(#[from] toml::de::Error),

    /// Flow name is not one of the known wizards.
    #[error("unknown flow `{name}` (expected `premium` or `create-actions`)")]
    UnknownFlow {
        /// The offending name
        name: String,
    },

    /// Snapshot could not be encoded.
    #[error("failed to encode snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}

impl SessionError {
    /// Check if editing the script or config file fixes the error.
    #[must_use]
    pub fn is_user_correctable(&self) -> bool {
        match self {
            Self::Wizard(err) => err.is_user_correctable(),
            Self::ScriptRead { .. } | Self::ScriptParse(_) | Self::UnknownFlow { .. } => true,
            Self::Snapshot(_) => false,
        }
    }
}

/// Which wizard a session drives.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlowKind {
    /// Premium Center
    #[default]
    Premium,
    /// Create/join organization or project
    CreateActions,
}

impl FlowKind {
    /// Name used on the command line and in scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::CreateActions => "create-actions",
        }
    }
}

impl fmt::Display for FlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlowKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "premium" => Ok(Self::Premium),
            "create-actions" => Ok(Self::CreateActions),
            other => Err(SessionError::UnknownFlow {
                name: other.to_string(),
            }),
        }
    }
}

/// One host action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case", deny_unknown_fields)]
pub enum ScriptStep {
    /// Host opens the modal
    Open,
    /// Host closes the modal
    Close,
    /// User clicks through to a view
    Navigate {
        /// View key, e.g. `moduleDetail`
        view: String,
        /// Selection id for parameterized views
        #[serde(default)]
        selection: Option<String>,
    },
    /// User presses back
    Back,
    /// User confirms the plan on screen
    Upgrade,
}

impl ScriptStep {
    /// Short label for logs and records.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::Navigate { .. } => "navigate",
            Self::Back => "back",
            Self::Upgrade => "upgrade",
        }
    }
}

/// A sequence of host actions against one wizard.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    /// Wizard to drive
    #[serde(default)]
    pub flow: FlowKind,
    /// Actions in order
    #[serde(default)]
    pub steps: Vec<ScriptStep>,
}

impl Script {
    /// Parse a script from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, SessionError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a script from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, SessionError> {
        let content = std::fs::read_to_string(path).map_err(|source| SessionError::ScriptRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Browse to a module, back out to the landing view, then close.
    pub fn premium_demo() -> Self {
        let navigate = |view: &str, selection: Option<&str>| ScriptStep::Navigate {
            view: view.to_string(),
            selection: selection.map(str::to_string),
        };
        Self {
            flow: FlowKind::Premium,
            steps: vec![
                ScriptStep::Open,
                navigate("moduleSelection", None),
                navigate("moduleDetail", Some("messaging")),
                ScriptStep::Upgrade,
                ScriptStep::Back,
                ScriptStep::Back,
                ScriptStep::Back,
            ],
        }
    }
}

/// Outcome of one script step.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct StepRecord {
    /// Zero-based step index
    pub index: usize,
    /// Step label
    pub action: &'static str,
    /// Host-visible events (`close_requested`, `checkout: <plan>`)
    pub events: Vec<String>,
    /// Wizard snapshot after the step
    pub snapshot: serde_json::Value,
}

/// A wizard driven by a session.
#[derive(Debug)]
pub enum HostedWizard {
    /// Premium Center
    Premium(PremiumCenter),
    /// Create Actions
    CreateActions(CreateActionsModal),
}

impl HostedWizard {
    /// Build the wizard for `kind` with validated configuration.
    pub fn new<H>(kind: FlowKind, config: WizardConfig, checkout: H) -> Result<Self, SessionError>
    where
        H: UpgradeHandler + 'static,
    {
        Ok(match kind {
            FlowKind::Premium => Self::Premium(PremiumCenter::with_config(
                ModuleCatalog::standard(),
                config,
                checkout,
            )?),
            FlowKind::CreateActions => {
                Self::CreateActions(WizardController::with_config(CreateActionsFlow, config)?)
            }
        })
    }

    /// Which wizard this is.
    pub fn kind(&self) -> FlowKind {
        match self {
            Self::Premium(_) => FlowKind::Premium,
            Self::CreateActions(_) => FlowKind::CreateActions,
        }
    }

    /// Apply one step and return the events the host observed.
    pub fn apply(&mut self, step: &ScriptStep) -> Result<Vec<String>, SessionError> {
        let mut events = Vec::new();
        match (self, step) {
            (Self::Premium(center), ScriptStep::Open) => center.open(),
            (Self::Premium(center), ScriptStep::Close) => center.close(),
            (Self::Premium(center), ScriptStep::Navigate { view, selection }) => {
                let view = PremiumView::from_key(view)
                    .ok_or_else(|| WizardError::unknown_view(view.as_str()))?;
                center.navigate(view, selection.clone().map(ModuleId::from));
            }
            (Self::Premium(center), ScriptStep::Back) => {
                if center.back() == BackOutcome::CloseRequested {
                    center.close();
                    events.push("close_requested".to_string());
                }
            }
            (Self::Premium(center), ScriptStep::Upgrade) => {
                if let Some(plan) = center.upgrade_current() {
                    events.push(format!("checkout: {plan}"));
                }
            }

            (Self::CreateActions(modal), ScriptStep::Open) => modal.set_open(true),
            (Self::CreateActions(modal), ScriptStep::Close) => modal.set_open(false),
            (Self::CreateActions(modal), ScriptStep::Navigate { view, selection }) => {
                let view = CreateActionView::from_key(view)
                    .ok_or_else(|| WizardError::unknown_view(view.as_str()))?;
                if selection.is_some() {
                    tracing::warn!(view = view.key(), "Create actions views take no selection");
                }
                modal.navigate_to(view, None);
            }
            (Self::CreateActions(modal), ScriptStep::Back) => {
                if modal.back() == BackOutcome::CloseRequested {
                    modal.set_open(false);
                    events.push("close_requested".to_string());
                }
            }
            (Self::CreateActions(_), ScriptStep::Upgrade) => {
                tracing::warn!("Create actions wizard has no checkout");
            }
        }
        Ok(events)
    }

    /// Current snapshot as JSON.
    pub fn snapshot_json(&self) -> Result<serde_json::Value, SessionError> {
        Ok(match self {
            Self::Premium(center) => serde_json::to_value(center.snapshot())?,
            Self::CreateActions(modal) => serde_json::to_value(modal.snapshot())?,
        })
    }

    /// Run every step of `script`, recording a snapshot after each.
    pub fn run(&mut self, script: &Script) -> Result<Vec<StepRecord>, SessionError> {
        let mut records = Vec::with_capacity(script.steps.len());
        for (index, step) in script.steps.iter().enumerate() {
            let events = self.apply(step)?;
            tracing::debug!(index, action = step.label(), events = events.len(), "Applied script step");
            records.push(StepRecord {
                index,
                action: step.label(),
                events,
                snapshot: self.snapshot_json()?,
            });
        }
        Ok(records)
    }
}
