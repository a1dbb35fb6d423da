//! Selection context carried alongside navigation.
//!
//! Holds the detail id (e.g. which module is open) for views that need
//! one. [`SelectionContext::retain_for`] is the only place the clearing
//! rule lives: a selection never outlives a view that does not use it.

use crate::view::WizardView;

/// Optional detail-item id tied to the current view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionContext<S> {
    selected: Option<S>,
}

impl<S> Default for SelectionContext<S> {
    fn default() -> Self {
        Self { selected: None }
    }
}

impl<S> SelectionContext<S> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `id`, replacing any previous selection.
    pub fn set(&mut self, id: S) {
        self.selected = Some(id);
    }

    /// Drop the current selection.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The current selection, if any.
    pub fn get(&self) -> Option<&S> {
        self.selected.as_ref()
    }

    /// Check if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_none()
    }

    /// Clear the selection unless `view` takes one.
    ///
    /// Returns true when a selection was dropped.
    pub fn retain_for<V: WizardView>(&mut self, view: V) -> bool {
        if !view.takes_selection() && self.selected.is_some() {
            self.selected = None;
            return true;
        }
        false
    }
}
