//! # Wizard Views
//!
//! A wizard's views form a closed, compile-time enumeration. Each flow
//! declares its own `Copy` enum and implements [`WizardView`] for it.

use std::fmt::Debug;
use std::hash::Hash;

/// A named screen inside a wizard.
///
/// Implementors are plain enums. The trait only describes the shape the
/// engine needs: which variant is the root, how to list and name every
/// variant, and which variants require a selection id to render.
pub trait WizardView: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// The view shown when the wizard opens.
    const ROOT: Self;

    /// Every view of the flow, root first.
    fn all() -> &'static [Self];

    /// Stable identifier used in config files, scripts and snapshots.
    fn key(self) -> &'static str;

    /// Whether this view renders a detail item and therefore needs a
    /// selection id.
    fn takes_selection(self) -> bool {
        false
    }

    /// Look up a view by its [`key`](WizardView::key).
    fn from_key(key: &str) -> Option<Self> {
        Self::all().iter().copied().find(|view| view.key() == key)
    }

    /// Check if this is the root view.
    fn is_root(self) -> bool {
        self == Self::ROOT
    }
}
