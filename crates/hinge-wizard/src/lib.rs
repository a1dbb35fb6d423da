//! # Hinge Wizard
//!
//! Portable navigation engine for multi-step modals ("wizards").
//!
//! A wizard presents a closed set of named views inside a modal. The user
//! moves forward by navigating to a view and moves backward through visit
//! history; backing out of the root view asks the host to close the modal.
//! Some views carry a selection id (e.g. which module is being detailed).
//!
//! ## Components
//!
//! - [`WizardView`]: the closed view enumeration of a flow
//! - [`NavigationStack`]: non-empty visit history
//! - [`SelectionContext`]: optional detail id tied to the current view
//! - [`ViewRegistry`]: per-view render functions
//! - [`WizardFlow`]: binds views, selection type and title derivation
//! - [`WizardController`]: the interface a modal's view layer calls
//!
//! ## Flow
//!
//! ```text
//! click → navigate_to / back → stack + selection update → snapshot → render
//! ```
//!
//! None of the navigation operations can fail. Errors only surface at the
//! configuration and registry boundaries ([`WizardError`]).

pub mod config;
pub mod controller;
pub mod errors;
pub mod flow;
pub mod registry;
pub mod selection;
pub mod stack;
pub mod view;

pub use config::{CopyOverride, WizardConfig};
pub use controller::{BackOutcome, WizardController, WizardSnapshot};
pub use errors::WizardError;
pub use flow::{ViewCopy, WizardFlow};
pub use registry::ViewRegistry;
pub use selection::SelectionContext;
pub use stack::{NavigationStack, PopOutcome};
pub use view::WizardView;
