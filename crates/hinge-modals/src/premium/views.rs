//! Premium Center views and header copy.

use hinge_wizard::{ViewCopy, WizardFlow, WizardView};
use serde::{Deserialize, Serialize};

use super::catalog::{ModuleCatalog, ModuleId};
use crate::checkout::format_price;

/// Views of the Premium Center wizard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PremiumView {
    /// Landing view: bundle or individual modules
    #[default]
    Initial,
    /// All-modules bundle offer
    BundlePlan,
    /// List of individually purchasable modules
    ModuleSelection,
    /// One module in detail; needs a [`ModuleId`]
    ModuleDetail,
}

impl WizardView for PremiumView {
    const ROOT: Self = Self::Initial;

    fn all() -> &'static [Self] {
        &[
            Self::Initial,
            Self::BundlePlan,
            Self::ModuleSelection,
            Self::ModuleDetail,
        ]
    }

    fn key(self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::BundlePlan => "bundlePlan",
            Self::ModuleSelection => "moduleSelection",
            Self::ModuleDetail => "moduleDetail",
        }
    }

    fn takes_selection(self) -> bool {
        matches!(self, Self::ModuleDetail)
    }
}

/// Premium Center flow definition, backed by a module catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PremiumFlow {
    catalog: ModuleCatalog,
}

impl PremiumFlow {
    /// Create a flow over `catalog`.
    pub fn new(catalog: ModuleCatalog) -> Self {
        Self { catalog }
    }

    /// The catalog titles are derived from.
    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }
}

impl WizardFlow for PremiumFlow {
    type View = PremiumView;
    type Selection = ModuleId;

    fn describe(&self, view: PremiumView, selection: Option<&ModuleId>) -> ViewCopy {
        match view {
            PremiumView::Initial => ViewCopy::new(
                "Premium Center",
                "Unlock premium features for your professional network",
            ),
            PremiumView::BundlePlan => ViewCopy::new(
                "Premium Bundle",
                format!(
                    "Every module for {}",
                    format_price(self.catalog.bundle.monthly_price_cents)
                ),
            ),
            PremiumView::ModuleSelection => ViewCopy::new(
                "Choose Modules",
                "Pick only the premium features you need",
            ),
            PremiumView::ModuleDetail => match selection.and_then(|id| self.catalog.get(id)) {
                Some(module) => ViewCopy::new(module.name.as_str(), module.summary.as_str()),
                None => ViewCopy::new("Module Details", "Select a module to see what it includes"),
            },
        }
    }
}
