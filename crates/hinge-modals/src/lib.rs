//! # Hinge Modals
//!
//! The concrete wizards of the CodeHinge front-end, built on
//! [`hinge_wizard`]:
//!
//! - [`premium`]: the Premium Center upgrade flow (bundle plan, module
//!   browsing, module detail, checkout hand-off)
//! - [`create_actions`]: the create/join organization and project flow
//! - [`session`]: scripted sessions that drive either wizard and emit
//!   JSON snapshots, used by the `wizard-host` binary and by tests

pub mod checkout;
pub mod create_actions;
pub mod premium;
pub mod session;

pub use checkout::{format_price, RecordingCheckout, UpgradeHandler};
pub use create_actions::{CreateActionView, CreateActionsFlow, CreateActionsModal};
pub use premium::{
    BundlePlan, ModuleCatalog, ModuleId, PremiumCenter, PremiumFlow, PremiumModule, PremiumView,
};
pub use session::{FlowKind, HostedWizard, Script, ScriptStep, SessionError, StepRecord};
