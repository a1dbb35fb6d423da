//! # Premium Center
//!
//! Upgrade wizard shown from the navigation bar and from locked features.
//!
//! ```text
//! initial ──► bundlePlan
//!    │
//!    └──────► moduleSelection ──► moduleDetail(module id)
//! ```
//!
//! Backing out of `initial` closes the modal. Upgrading hands a plan
//! description to the host's [`UpgradeHandler`](crate::UpgradeHandler).

mod catalog;
mod center;
mod views;

pub use catalog::{BundlePlan, ModuleCatalog, ModuleId, PremiumModule};
pub use center::PremiumCenter;
pub use views::{PremiumFlow, PremiumView};
