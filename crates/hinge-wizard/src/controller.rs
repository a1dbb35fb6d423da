//! # Wizard Controller
//!
//! Glues the navigation stack, the selection context and a flow's copy
//! derivation into the single object a modal's view layer talks to.
//!
//! ## State Machine
//!
//! - States: the flow's views. Initial state: `View::ROOT`.
//! - `navigate_to` pushes, `back` pops.
//! - `back` at the root is not a transition. It fires the close handler
//!   and returns [`BackOutcome::CloseRequested`]; the host then flips its
//!   open flag.
//! - A closed → open edge (`set_open(true)` or `on_modal_open`) resets the
//!   history to the root and clears the selection.
//! - While the modal is closed, `navigate_to` and `back` are ignored. No
//!   history changes and the close handler does not run.
//!
//! Every history entry remembers the selection it was visited with, so
//! backing into a parameterized view restores its id while backing into
//! any other view leaves the context empty.

use std::fmt;

use serde::Serialize;

use crate::config::WizardConfig;
use crate::errors::WizardError;
use crate::flow::{ViewCopy, WizardFlow};
use crate::selection::SelectionContext;
use crate::stack::{NavigationStack, PopOutcome};
use crate::view::WizardView;

/// Result of a back request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackOutcome<V> {
    /// History was popped; carries the view now shown.
    Navigated(V),
    /// Already at the root. The close handler ran and the host must close
    /// the modal.
    CloseRequested,
    /// The modal is closed; nothing changed.
    Ignored,
}

/// Everything a host needs to render the wizard's current state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WizardSnapshot<V, S> {
    /// View on top of the history
    pub view: V,
    /// Selection id for parameterized views
    pub selection: Option<S>,
    /// Header title
    pub title: String,
    /// Header description
    pub description: String,
    /// History depth, root included
    pub depth: usize,
    /// Whether the host reports the modal as open
    pub open: bool,
    /// View keys from root to top
    pub history: Vec<&'static str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Visit<V, S> {
    view: V,
    selection: Option<S>,
}

impl<V: WizardView, S> Visit<V, S> {
    fn root() -> Self {
        Self {
            view: V::ROOT,
            selection: None,
        }
    }
}

type CloseHandler = Box<dyn FnMut() + Send>;

/// Navigation controller for one modal instance.
pub struct WizardController<F: WizardFlow> {
    flow: F,
    config: WizardConfig,
    history: NavigationStack<Visit<F::View, F::Selection>>,
    selection: SelectionContext<F::Selection>,
    open: bool,
    on_close: Option<CloseHandler>,
}

impl<F> fmt::Debug for WizardController<F>
where
    F: WizardFlow,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WizardController")
            .field("view", &self.current_view())
            .field("selection", &self.selection.get())
            .field("depth", &self.history.len())
            .field("open", &self.open)
            .field("has_close_handler", &self.on_close.is_some())
            .finish()
    }
}

impl<F: WizardFlow> WizardController<F> {
    /// Create a closed controller with default configuration.
    pub fn new(flow: F) -> Self {
        Self {
            flow,
            config: WizardConfig::default(),
            history: NavigationStack::new(Visit::root()),
            selection: SelectionContext::new(),
            open: false,
            on_close: None,
        }
    }

    /// Create a controller with validated configuration.
    pub fn with_config(flow: F, config: WizardConfig) -> Result<Self, WizardError> {
        config.validate_for::<F::View>()?;
        let mut controller = Self::new(flow);
        controller.history = controller.history.with_max_depth(config.depth_bound());
        controller.config = config;
        Ok(controller)
    }

    /// Register the host's close callback, invoked when `back` runs at the root.
    #[must_use]
    pub fn with_close_handler<H>(mut self, handler: H) -> Self
    where
        H: FnMut() + Send + 'static,
    {
        self.on_close = Some(Box::new(handler));
        self
    }

    /// Replace the close callback.
    pub fn set_close_handler<H>(&mut self, handler: H)
    where
        H: FnMut() + Send + 'static,
    {
        self.on_close = Some(Box::new(handler));
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Push `view` onto the history and update the selection.
    ///
    /// `param` is kept only when `view` takes a selection; in every other
    /// case the selection ends up empty.
    /// Ignored while the modal is closed.
    pub fn navigate_to(&mut self, view: F::View, param: Option<F::Selection>) {
        if !self.open {
            tracing::debug!(view = view.key(), "Ignoring navigation on closed wizard");
            return;
        }

        let selection = if view.takes_selection() {
            param
        } else {
            if param.is_some() {
                tracing::warn!(
                    view = view.key(),
                    "Dropping selection for view that does not take one"
                );
            }
            None
        };

        match &selection {
            Some(id) => self.selection.set(id.clone()),
            None => self.selection.clear(),
        }
        self.history.push(Visit { view, selection });

        tracing::debug!(
            view = view.key(),
            depth = self.history.len(),
            "Wizard navigated"
        );
    }

    /// Go back one step, or request close when already at the root.
    pub fn back(&mut self) -> BackOutcome<F::View> {
        if !self.open {
            tracing::debug!("Ignoring back on closed wizard");
            return BackOutcome::Ignored;
        }

        match self.history.pop() {
            PopOutcome::Popped(left) => {
                self.sync_selection();
                let view = self.current_view();
                tracing::debug!(
                    from = left.view.key(),
                    to = view.key(),
                    depth = self.history.len(),
                    "Wizard went back"
                );
                BackOutcome::Navigated(view)
            }
            PopOutcome::AtRoot => {
                tracing::debug!("Back at wizard root; requesting close");
                if let Some(handler) = self.on_close.as_mut() {
                    handler();
                }
                BackOutcome::CloseRequested
            }
        }
    }

    /// Open the modal on a fresh session: root view, empty selection.
    pub fn on_modal_open(&mut self) {
        self.history.reset(Visit::root());
        self.selection.clear();
        self.open = true;
        tracing::debug!(
            root = <F::View as WizardView>::ROOT.key(),
            "Wizard reset on open"
        );
    }

    /// Mirror the host's open flag. A closed → open edge resets the wizard.
    pub fn set_open(&mut self, open: bool) {
        if open && !self.open {
            self.on_modal_open();
        }
        self.open = open;
    }

    // ========================================================================
    // Derived state
    // ========================================================================

    /// Header copy for `view` with `param` as its selection.
    ///
    /// Pure and total. Blank copy from a flow is replaced by a generic
    /// fallback built from the view key.
    pub fn title_for(&self, view: F::View, param: Option<&F::Selection>) -> ViewCopy {
        let selection = if view.takes_selection() { param } else { None };
        let derived = self.flow.describe(view, selection);
        let copy = match self.config.override_for(view) {
            Some(copy_override) => copy_override.apply(derived),
            None => derived,
        };

        if copy.is_complete() {
            copy
        } else {
            fallback_copy(view)
        }
    }

    /// Header copy for the current view and selection.
    pub fn current_copy(&self) -> ViewCopy {
        self.title_for(self.current_view(), self.selection.get())
    }

    /// View on top of the history.
    pub fn current_view(&self) -> F::View {
        self.history.current().view
    }

    /// Current selection id, if any.
    pub fn selection(&self) -> Option<&F::Selection> {
        self.selection.get()
    }

    /// History depth, root included.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    /// Check if the wizard shows its root view.
    pub fn is_at_root(&self) -> bool {
        self.history.is_at_root()
    }

    /// Whether the host reports the modal as open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// View keys from root to top, for breadcrumbs.
    pub fn history(&self) -> Vec<&'static str> {
        self.history.iter().map(|visit| visit.view.key()).collect()
    }

    /// The flow this controller drives.
    pub fn flow(&self) -> &F {
        &self.flow
    }

    /// Active configuration.
    pub fn config(&self) -> &WizardConfig {
        &self.config
    }

    /// Capture the host-facing state.
    pub fn snapshot(&self) -> WizardSnapshot<F::View, F::Selection> {
        let copy = self.current_copy();
        WizardSnapshot {
            view: self.current_view(),
            selection: self.selection.get().cloned(),
            title: copy.title,
            description: copy.description,
            depth: self.history.len(),
            open: self.open,
            history: self.history(),
        }
    }

    fn sync_selection(&mut self) {
        let visit = self.history.current();
        match &visit.selection {
            Some(id) => {
                let id = id.clone();
                self.selection.set(id);
            }
            None => self.selection.clear(),
        }
        let view = visit.view;
        self.selection.retain_for(view);
    }
}

/// Generic copy for a view whose flow produced blank strings.
fn fallback_copy<V: WizardView>(view: V) -> ViewCopy {
    let mut title = String::new();
    for (i, ch) in view.key().chars().enumerate() {
        if i == 0 {
            title.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            title.push(' ');
            title.push(ch);
        } else if ch == '_' || ch == '-' {
            title.push(' ');
        } else {
            title.push(ch);
        }
    }
    if title.trim().is_empty() {
        title = "Details".to_string();
    }
    ViewCopy::new(title, "Continue when you are ready")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::test_flow::DemoFlow;
    use crate::view::test_views::DemoView;
    use assert_matches::assert_matches;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn open_controller() -> WizardController<DemoFlow> {
        let mut controller = WizardController::new(DemoFlow::default());
        controller.set_open(true);
        controller
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    #[test]
    fn test_starts_closed_at_root() {
        let controller = WizardController::new(DemoFlow::default());
        assert!(!controller.is_open());
        assert_eq!(controller.current_view(), DemoView::Start);
        assert_eq!(controller.depth(), 1);
        assert!(controller.selection().is_none());
    }

    #[test]
    fn test_navigate_stores_selection_for_parameterized_view() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::List, None);
        controller.navigate_to(DemoView::Detail, Some("messaging".to_string()));
        assert_eq!(controller.current_view(), DemoView::Detail);
        assert_eq!(controller.selection().map(String::as_str), Some("messaging"));
        assert_eq!(controller.history(), vec!["start", "list", "detail"]);
    }

    #[test]
    fn test_navigate_to_plain_view_drops_selection() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::Detail, Some("jobs".to_string()));
        controller.navigate_to(DemoView::Summary, Some("jobs".to_string()));
        assert!(controller.selection().is_none());
    }

    #[test]
    fn test_back_restores_selection_of_earlier_detail_view() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::Detail, Some("jobs".to_string()));
        controller.navigate_to(DemoView::Summary, None);
        assert!(controller.selection().is_none());

        assert_eq!(controller.back(), BackOutcome::Navigated(DemoView::Detail));
        assert_eq!(controller.selection().map(String::as_str), Some("jobs"));
    }

    #[test]
    fn test_back_at_root_fires_close_once_without_mutation() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let mut controller = WizardController::new(DemoFlow::default())
            .with_close_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });
        controller.set_open(true);

        assert_matches!(controller.back(), BackOutcome::CloseRequested);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
        assert_eq!(controller.depth(), 1);
        assert_eq!(controller.current_view(), DemoView::Start);
    }

    #[test]
    fn test_closed_wizard_ignores_back_and_navigation() {
        let closes = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closes);
        let mut controller = WizardController::new(DemoFlow::default())
            .with_close_handler(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(controller.back(), BackOutcome::Ignored);
        assert_eq!(controller.back(), BackOutcome::Ignored);
        assert_eq!(closes.load(Ordering::SeqCst), 0);

        controller.navigate_to(DemoView::Detail, Some("jobs".to_string()));
        assert_eq!(controller.depth(), 1);
        assert!(controller.selection().is_none());

        // Closing after a close request: further backs stay silent.
        controller.set_open(true);
        assert_eq!(controller.back(), BackOutcome::CloseRequested);
        controller.set_open(false);
        assert_eq!(controller.back(), BackOutcome::Ignored);
        assert_eq!(closes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_on_modal_open_marks_open() {
        let mut controller = WizardController::new(DemoFlow::default());
        controller.on_modal_open();
        controller.navigate_to(DemoView::Detail, Some("jobs".to_string()));
        controller.on_modal_open();

        let snapshot = controller.snapshot();
        assert!(snapshot.open);
        assert_eq!(snapshot.history, vec!["start"]);
        assert_eq!(snapshot.selection, None);
    }

    #[test]
    fn test_reopen_resets_history() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::Detail, Some("jobs".to_string()));
        controller.set_open(false);
        // Closing alone keeps state; only the open edge resets.
        assert_eq!(controller.current_view(), DemoView::Detail);

        controller.set_open(true);
        assert_eq!(controller.current_view(), DemoView::Start);
        assert_eq!(controller.depth(), 1);
        assert!(controller.selection().is_none());
    }

    #[test]
    fn test_repeated_open_does_not_reset() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::List, None);
        controller.set_open(true);
        assert_eq!(controller.current_view(), DemoView::List);
    }

    #[test]
    fn test_bounded_history_from_config() {
        let config = WizardConfig {
            max_depth: Some(2),
            ..WizardConfig::default()
        };
        let mut controller = WizardController::with_config(DemoFlow::default(), config).unwrap();
        controller.set_open(true);
        controller.navigate_to(DemoView::List, None);
        controller.navigate_to(DemoView::Summary, None);
        assert_eq!(controller.history(), vec!["start", "summary"]);
        assert_eq!(controller.back(), BackOutcome::Navigated(DemoView::Start));
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = WizardConfig::from_toml_str("[copy.bogus]\ntitle = \"x\"").unwrap();
        assert_matches!(
            WizardController::with_config(DemoFlow::default(), config),
            Err(WizardError::UnknownView { .. })
        );
    }

    // ========================================================================
    // Copy
    // ========================================================================

    #[test]
    fn test_title_for_resolved_and_missing_selection() {
        let controller = open_controller();
        let resolved = controller.title_for(DemoView::Detail, Some(&"jobs".to_string()));
        assert_eq!(resolved.title, "jobs");

        let stale = controller.title_for(DemoView::Detail, Some(&"deleted".to_string()));
        assert_eq!(stale, ViewCopy::new("Item Details", "Select an item"));
    }

    #[test]
    fn test_title_for_ignores_param_on_plain_view() {
        let controller = open_controller();
        assert_eq!(
            controller.title_for(DemoView::List, Some(&"jobs".to_string())),
            controller.title_for(DemoView::List, None)
        );
    }

    #[test]
    fn test_config_override_applies() {
        let config = WizardConfig::from_toml_str(
            "[copy.summary]\ndescription = \"Double check everything\"",
        )
        .unwrap();
        let controller = WizardController::with_config(DemoFlow::default(), config).unwrap();
        assert_eq!(
            controller.title_for(DemoView::Summary, None),
            ViewCopy::new("Summary", "Double check everything")
        );
    }

    #[test]
    fn test_fallback_copy_from_key() {
        assert_eq!(fallback_copy(DemoView::Summary).title, "Summary");
    }

    struct BlankFlow;

    impl WizardFlow for BlankFlow {
        type View = DemoView;
        type Selection = String;

        fn describe(&self, _view: DemoView, _selection: Option<&String>) -> ViewCopy {
            ViewCopy::new("", " ")
        }
    }

    #[test]
    fn test_title_for_blank_flow_copy_is_stable_fallback() {
        let controller = WizardController::new(BlankFlow);
        let first = controller.title_for(DemoView::Detail, None);
        assert_eq!(first, ViewCopy::new("Detail", "Continue when you are ready"));
        assert_eq!(controller.title_for(DemoView::Detail, None), first);
        assert_eq!(controller.depth(), 1);
        assert!(!controller.is_open());
    }

    #[test]
    fn test_snapshot_serializes() {
        let mut controller = open_controller();
        controller.navigate_to(DemoView::Detail, Some("messaging".to_string()));
        let snapshot = controller.snapshot();
        assert_eq!(snapshot.depth, 2);
        assert!(snapshot.open);

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["view"], "detail");
        assert_eq!(json["selection"], "messaging");
        assert_eq!(json["title"], "messaging");
        assert_eq!(json["history"], serde_json::json!(["start", "detail"]));
    }
}
