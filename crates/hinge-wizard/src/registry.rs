//! View registry: one render function per view.
//!
//! The engine only tracks view names. Hosts that want the registry to
//! produce content register a pure function of a shared context for every
//! view and call [`ViewRegistry::ensure_complete`] once at construction.

use std::collections::HashMap;
use std::fmt;

use crate::errors::WizardError;
use crate::view::WizardView;

type RenderFn<C, O> = Box<dyn Fn(&C) -> O + Send + Sync>;

/// Render functions keyed by view.
pub struct ViewRegistry<V: WizardView, C, O> {
    renderers: HashMap<V, RenderFn<C, O>>,
}

impl<V: WizardView, C, O> Default for ViewRegistry<V, C, O> {
    fn default() -> Self {
        Self {
            renderers: HashMap::new(),
        }
    }
}

impl<V: WizardView, C, O> fmt::Debug for ViewRegistry<V, C, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut views: Vec<_> = self.renderers.keys().map(|view| view.key()).collect();
        views.sort_unstable();
        f.debug_struct("ViewRegistry").field("views", &views).finish()
    }
}

impl<V: WizardView, C, O> ViewRegistry<V, C, O> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the renderer for `view`.
    #[must_use]
    pub fn register<F>(mut self, view: V, render: F) -> Self
    where
        F: Fn(&C) -> O + Send + Sync + 'static,
    {
        self.renderers.insert(view, Box::new(render));
        self
    }

    /// Render `view` against `ctx`.
    pub fn render(&self, view: V, ctx: &C) -> Result<O, WizardError> {
        self.renderers
            .get(&view)
            .map(|render| render(ctx))
            .ok_or(WizardError::UnregisteredView { view: view.key() })
    }

    /// Views of the flow that have no renderer, in declaration order.
    pub fn missing(&self) -> Vec<V> {
        V::all()
            .iter()
            .copied()
            .filter(|view| !self.renderers.contains_key(view))
            .collect()
    }

    /// Fail on the first view without a renderer.
    pub fn ensure_complete(&self) -> Result<(), WizardError> {
        match self.missing().first() {
            Some(view) => Err(WizardError::UnregisteredView { view: view.key() }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::test_views::DemoView;
    use assert_matches::assert_matches;

    fn partial() -> ViewRegistry<DemoView, u32, String> {
        ViewRegistry::new()
            .register(DemoView::Start, |n| format!("start {n}"))
            .register(DemoView::List, |n| format!("{n} items"))
    }

    #[test]
    fn test_render_registered_view() {
        let registry = partial();
        assert_eq!(registry.render(DemoView::List, &3).unwrap(), "3 items");
    }

    #[test]
    fn test_render_unregistered_view_errors() {
        let registry = partial();
        assert_matches!(
            registry.render(DemoView::Summary, &0),
            Err(WizardError::UnregisteredView { view: "summary" })
        );
    }

    #[test]
    fn test_missing_and_complete() {
        let registry = partial();
        assert_eq!(registry.missing(), vec![DemoView::Detail, DemoView::Summary]);
        assert_matches!(
            registry.ensure_complete(),
            Err(WizardError::UnregisteredView { view: "detail" })
        );

        let registry = registry
            .register(DemoView::Detail, |_| String::new())
            .register(DemoView::Summary, |_| String::new());
        assert!(registry.ensure_complete().is_ok());
        assert_eq!(
            format!("{registry:?}"),
            "ViewRegistry { views: [\"detail\", \"list\", \"start\", \"summary\"] }"
        );
    }
}
