//! The Premium Center modal: navigation, body rendering and checkout.

use std::fmt;

use hinge_wizard::{
    BackOutcome, ViewCopy, ViewRegistry, WizardConfig, WizardController, WizardError,
    WizardSnapshot,
};

use super::catalog::{ModuleCatalog, ModuleId};
use super::views::{PremiumFlow, PremiumView};
use crate::checkout::{format_price, UpgradeHandler};

type BodyRegistry = ViewRegistry<PremiumView, WizardController<PremiumFlow>, Vec<String>>;

/// Premium Center modal state for one host.
pub struct PremiumCenter {
    wizard: WizardController<PremiumFlow>,
    checkout: Box<dyn UpgradeHandler>,
    bodies: BodyRegistry,
}

impl fmt::Debug for PremiumCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PremiumCenter")
            .field("wizard", &self.wizard)
            .field("bodies", &self.bodies)
            .finish_non_exhaustive()
    }
}

impl PremiumCenter {
    /// Create a closed Premium Center over `catalog`.
    pub fn new<H>(catalog: ModuleCatalog, checkout: H) -> Self
    where
        H: UpgradeHandler + 'static,
    {
        Self::from_controller(WizardController::new(PremiumFlow::new(catalog)), checkout)
    }

    /// Create a closed Premium Center with validated configuration.
    pub fn with_config<H>(
        catalog: ModuleCatalog,
        config: WizardConfig,
        checkout: H,
    ) -> Result<Self, WizardError>
    where
        H: UpgradeHandler + 'static,
    {
        let wizard = WizardController::with_config(PremiumFlow::new(catalog), config)?;
        Ok(Self::from_controller(wizard, checkout))
    }

    fn from_controller<H>(wizard: WizardController<PremiumFlow>, checkout: H) -> Self
    where
        H: UpgradeHandler + 'static,
    {
        Self {
            wizard,
            checkout: Box::new(checkout),
            bodies: body_registry(),
        }
    }

    /// Register the host's close callback.
    #[must_use]
    pub fn with_close_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.wizard.set_close_handler(handler);
        self
    }

    // ========================================================================
    // Open state
    // ========================================================================

    /// Host opened the modal. Starts a fresh session on the landing view.
    pub fn open(&mut self) {
        self.wizard.set_open(true);
    }

    /// Host closed the modal.
    pub fn close(&mut self) {
        self.wizard.set_open(false);
    }

    /// Whether the modal is open.
    pub fn is_open(&self) -> bool {
        self.wizard.is_open()
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Show the bundle offer.
    pub fn show_bundle(&mut self) {
        self.wizard.navigate_to(PremiumView::BundlePlan, None);
    }

    /// Show the list of individual modules.
    pub fn browse_modules(&mut self) {
        self.wizard.navigate_to(PremiumView::ModuleSelection, None);
    }

    /// Show one module in detail.
    pub fn show_module(&mut self, id: impl Into<ModuleId>) {
        self.wizard
            .navigate_to(PremiumView::ModuleDetail, Some(id.into()));
    }

    /// Navigate to any view with an optional module id.
    pub fn navigate(&mut self, view: PremiumView, module: Option<ModuleId>) {
        self.wizard.navigate_to(view, module);
    }

    /// Go back, or request close from the landing view.
    pub fn back(&mut self) -> BackOutcome<PremiumView> {
        self.wizard.back()
    }

    // ========================================================================
    // Checkout
    // ========================================================================

    /// Start checkout for the bundle. Returns the plan description sent.
    pub fn upgrade_bundle(&mut self) -> String {
        let plan = self.wizard.flow().catalog().bundle.plan_description();
        self.checkout.upgrade(&plan);
        plan
    }

    /// Start checkout for the module on screen.
    ///
    /// Does nothing when no module is selected or the selected id no
    /// longer resolves.
    pub fn upgrade_selected_module(&mut self) -> Option<String> {
        let plan = {
            let catalog = self.wizard.flow().catalog();
            let module = self.wizard.selection().and_then(|id| catalog.get(id));
            match module {
                Some(module) => module.plan_description(),
                None => {
                    tracing::warn!(
                        selection = ?self.wizard.selection(),
                        "No premium module to upgrade"
                    );
                    return None;
                }
            }
        };
        self.checkout.upgrade(&plan);
        Some(plan)
    }

    /// Start checkout for whatever the current view offers.
    pub fn upgrade_current(&mut self) -> Option<String> {
        match self.wizard.current_view() {
            PremiumView::BundlePlan => Some(self.upgrade_bundle()),
            PremiumView::ModuleDetail => self.upgrade_selected_module(),
            view => {
                tracing::warn!(view = ?view, "Current premium view offers no plan");
                None
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Header copy for the current view.
    pub fn copy(&self) -> ViewCopy {
        self.wizard.current_copy()
    }

    /// Body lines for the current view.
    pub fn body(&self) -> Result<Vec<String>, WizardError> {
        self.bodies.render(self.wizard.current_view(), &self.wizard)
    }

    /// Host-facing state.
    pub fn snapshot(&self) -> WizardSnapshot<PremiumView, ModuleId> {
        self.wizard.snapshot()
    }

    /// The underlying controller.
    pub fn wizard(&self) -> &WizardController<PremiumFlow> {
        &self.wizard
    }
}

fn body_registry() -> BodyRegistry {
    ViewRegistry::new()
        .register(PremiumView::Initial, |wizard: &WizardController<PremiumFlow>| {
            let catalog = wizard.flow().catalog();
            vec![
                format!(
                    "{}: {}",
                    catalog.bundle.plan_description(),
                    catalog.bundle.summary
                ),
                format!(
                    "Or pick individual modules ({} available)",
                    catalog.modules.len()
                ),
            ]
        })
        .register(PremiumView::BundlePlan, |wizard: &WizardController<PremiumFlow>| {
            let catalog = wizard.flow().catalog();
            let mut lines = vec![catalog.bundle.summary.clone()];
            lines.extend(catalog.modules.iter().map(|module| format!("- {}", module.name)));
            lines.push(format!(
                "Save {} compared to buying each module",
                format_price(catalog.bundle_savings_cents())
            ));
            lines
        })
        .register(PremiumView::ModuleSelection, |wizard: &WizardController<PremiumFlow>| {
            wizard
                .flow()
                .catalog()
                .modules
                .iter()
                .map(|module| {
                    format!(
                        "{} ({}): {}",
                        module.name,
                        format_price(module.monthly_price_cents),
                        module.summary
                    )
                })
                .collect()
        })
        .register(PremiumView::ModuleDetail, |wizard: &WizardController<PremiumFlow>| {
            let catalog = wizard.flow().catalog();
            match wizard.selection().and_then(|id| catalog.get(id)) {
                Some(module) => {
                    let mut lines = vec![module.description.clone()];
                    lines.extend(module.highlights.iter().map(|h| format!("- {h}")));
                    lines.push(module.plan_description());
                    lines
                }
                None => vec!["This module is no longer available.".to_string()],
            }
        })
}
