//! # Wizard Flows
//!
//! A flow ties a view enumeration to its selection id type and knows how
//! to describe each view for display.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::view::WizardView;

/// Title and description shown in a wizard's header.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewCopy {
    /// Header title
    pub title: String,
    /// Sub-heading under the title
    pub description: String,
}

impl ViewCopy {
    /// Create copy from a title and description.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Check that neither string is blank.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.trim().is_empty() && !self.description.trim().is_empty()
    }
}

/// Definition of a concrete wizard.
///
/// `describe` must be pure and total: it is called for every view, with or
/// without a selection, and must return non-empty copy even when the
/// selection no longer resolves to an item.
pub trait WizardFlow {
    /// The flow's closed view enumeration.
    type View: WizardView;

    /// Detail id carried by views that take a selection.
    type Selection: Clone + Eq + Debug;

    /// Derive header copy for `view`.
    fn describe(&self, view: Self::View, selection: Option<&Self::Selection>) -> ViewCopy;
}

#[cfg(test)]
pub(crate) mod test_flow {
    use super::*;
    use crate::view::test_views::DemoView;

    /// Flow over [`DemoView`] with a fixed list of known items.
    pub struct DemoFlow {
        pub items: Vec<&'static str>,
    }

    impl Default for DemoFlow {
        fn default() -> Self {
            Self {
                items: vec!["messaging", "jobs"],
            }
        }
    }

    impl WizardFlow for DemoFlow {
        type View = DemoView;
        type Selection = String;

        fn describe(&self, view: DemoView, selection: Option<&String>) -> ViewCopy {
            match view {
                DemoView::Start => ViewCopy::new("Start", "Pick a path"),
                DemoView::List => ViewCopy::new("Items", "Choose an item"),
                DemoView::Detail => match selection
                    .and_then(|id| self.items.iter().find(|item| **item == id.as_str()))
                {
                    Some(item) => ViewCopy::new(*item, format!("All about {item}")),
                    None => ViewCopy::new("Item Details", "Select an item"),
                },
                DemoView::Summary => ViewCopy::new("Summary", "Review and confirm"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_copy_completeness() {
        assert!(ViewCopy::new("Title", "Body").is_complete());
        assert!(!ViewCopy::new("  ", "Body").is_complete());
        assert!(!ViewCopy::new("Title", "").is_complete());
    }
}
