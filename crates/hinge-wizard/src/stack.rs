//! # Navigation Stack
//!
//! Visit history for back-navigation inside a wizard.
//!
//! ## Invariants
//!
//! - The stack is never empty; the first entry is the root.
//! - `pop()` at the root reports [`PopOutcome::AtRoot`] and leaves the
//!   stack untouched. Callers close the modal instead.
//! - Pushing the same entry twice is allowed and produces two back-stops.
//! - With a depth bound, overflow drops the oldest entry above the root.

use std::num::NonZeroUsize;

/// Result of popping the navigation stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopOutcome<T> {
    /// The top entry was removed; carries the removed entry.
    Popped(T),
    /// Only the root is left. Nothing was removed.
    AtRoot,
}

/// Ordered, non-empty visit history.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationStack<T> {
    entries: Vec<T>,
    max_depth: Option<NonZeroUsize>,
}

impl<T: Clone> NavigationStack<T> {
    /// Create a stack holding only `root`.
    pub fn new(root: T) -> Self {
        Self {
            entries: vec![root],
            max_depth: None,
        }
    }

    /// Bound the history to `max_depth` entries (root included).
    ///
    /// A bound of 1 would leave no room above the root; it is raised to 2.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: Option<NonZeroUsize>) -> Self {
        self.max_depth = max_depth.map(|depth| depth.max(NonZeroUsize::MIN.saturating_add(1)));
        self.trim_to_bound();
        self
    }

    /// Append `entry` as the new top.
    pub fn push(&mut self, entry: T) {
        self.entries.push(entry);
        self.trim_to_bound();
    }

    /// Remove the top entry unless it is the root.
    pub fn pop(&mut self) -> PopOutcome<T> {
        if self.entries.len() > 1 {
            match self.entries.pop() {
                Some(entry) => PopOutcome::Popped(entry),
                None => PopOutcome::AtRoot,
            }
        } else {
            PopOutcome::AtRoot
        }
    }

    /// Replace the whole history with a single `root` entry.
    pub fn reset(&mut self, root: T) {
        self.entries.clear();
        self.entries.push(root);
    }

    /// The entry currently shown.
    pub fn current(&self) -> &T {
        // Non-empty by construction: `new` and `reset` leave one entry and
        // `pop` never removes the last one.
        &self.entries[self.entries.len() - 1]
    }

    /// The bottom entry.
    pub fn root(&self) -> &T {
        &self.entries[0]
    }

    /// Number of entries, root included. Always at least 1.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; the stack is never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if only the root is left.
    pub fn is_at_root(&self) -> bool {
        self.entries.len() == 1
    }

    /// Configured depth bound, if any.
    pub fn max_depth(&self) -> Option<NonZeroUsize> {
        self.max_depth
    }

    /// Iterate entries from root to top.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    fn trim_to_bound(&mut self) {
        let Some(max) = self.max_depth else {
            return;
        };
        while self.entries.len() > max.get() {
            // Index 0 is the root and always survives.
            self.entries.remove(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_new_stack_is_root_only() {
        let stack = NavigationStack::new("root");
        assert_eq!(stack.len(), 1);
        assert!(stack.is_at_root());
        assert!(!stack.is_empty());
        assert_eq!(*stack.current(), "root");
        assert_eq!(*stack.root(), "root");
    }

    #[test]
    fn test_push_and_pop() {
        let mut stack = NavigationStack::new("root");
        stack.push("a");
        stack.push("b");
        assert_eq!(*stack.current(), "b");

        assert_eq!(stack.pop(), PopOutcome::Popped("b"));
        assert_eq!(*stack.current(), "a");
        assert_eq!(stack.pop(), PopOutcome::Popped("a"));
        assert!(stack.is_at_root());
    }

    #[test]
    fn test_pop_at_root_does_not_mutate() {
        let mut stack = NavigationStack::new("root");
        assert_matches!(stack.pop(), PopOutcome::AtRoot);
        assert_matches!(stack.pop(), PopOutcome::AtRoot);
        assert_eq!(stack.len(), 1);
        assert_eq!(*stack.current(), "root");
    }

    #[test]
    fn test_duplicate_pushes_create_back_stops() {
        let mut stack = NavigationStack::new("root");
        stack.push("a");
        stack.push("a");
        assert_eq!(stack.len(), 3);
        assert_eq!(stack.pop(), PopOutcome::Popped("a"));
        assert_eq!(*stack.current(), "a");
    }

    #[test]
    fn test_reset() {
        let mut stack = NavigationStack::new("root");
        stack.push("a");
        stack.push("b");
        stack.reset("root");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["root"]);
    }

    #[test]
    fn test_bounded_history_keeps_root() {
        let mut stack = NavigationStack::new("root").with_max_depth(NonZeroUsize::new(3));
        stack.push("a");
        stack.push("b");
        stack.push("c");
        assert_eq!(
            stack.iter().copied().collect::<Vec<_>>(),
            vec!["root", "b", "c"]
        );
    }

    #[test]
    fn test_bound_of_one_is_raised_to_two() {
        let mut stack = NavigationStack::new("root").with_max_depth(NonZeroUsize::new(1));
        assert_eq!(stack.max_depth(), NonZeroUsize::new(2));
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.iter().copied().collect::<Vec<_>>(), vec!["root", "b"]);
    }
}
