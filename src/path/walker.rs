//! Cursor over the steps of a parsed [`Path`].

use super::ast::{Path, Step};

/// A cursor positioned on one step of a [`Path`].
///
/// The walker starts on the first step and only ever moves forward. It is
/// `Copy`, so a recursive traversal can hand each frame its own cursor
/// instead of sharing one mutable position.
///
/// # Example
///
/// ```
/// use dotpath::path::{Path, PathWalker};
///
/// let path = Path::parse("items[1]").unwrap();
/// let mut walker = PathWalker::new(&path);
/// assert_eq!(walker.current_name(), Some("items"));
/// assert!(walker.advance());
/// assert_eq!(walker.current_index(), Some(1));
/// assert!(!walker.advance());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathWalker<'p> {
    steps: &'p [Step],
    position: usize,
}

impl<'p> PathWalker<'p> {
    /// Creates a walker positioned on the first step of `path`.
    pub fn new(path: &'p Path) -> Self {
        Self {
            steps: path.steps(),
            position: 0,
        }
    }

    /// Returns the step under the cursor.
    pub fn current(&self) -> &'p Step {
        &self.steps[self.position]
    }

    /// Returns true if the current step is an index step.
    pub fn is_index_step(&self) -> bool {
        self.current().is_index()
    }

    /// Returns the index of the current step, if it is an index step.
    pub fn current_index(&self) -> Option<usize> {
        self.current().index()
    }

    /// Returns the name of the current step, if it is a named step.
    pub fn current_name(&self) -> Option<&'p str> {
        self.current().name()
    }

    /// Moves to the next step.
    ///
    /// Returns false, without moving, once the last step is reached.
    pub fn advance(&mut self) -> bool {
        if self.position + 1 < self.steps.len() {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Returns the zero-based position of the cursor.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns true if the cursor is on the last step.
    pub fn is_last(&self) -> bool {
        self.position + 1 == self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_step_walker_is_last() {
        let path = Path::parse("name").unwrap();
        let walker = PathWalker::new(&path);
        assert!(walker.is_last());
        assert_eq!(walker.position(), 0);
        assert!(!walker.is_index_step());
        assert_eq!(walker.current_index(), None);
    }

    #[test]
    fn test_copies_advance_independently() {
        let path = Path::parse("a.b.c").unwrap();
        let mut first = PathWalker::new(&path);
        let second = first;

        assert!(first.advance());
        assert_eq!(first.current_name(), Some("b"));
        assert_eq!(second.current_name(), Some("a"));
    }

    #[test]
    fn test_advance_past_end_is_idempotent() {
        let path = Path::parse("[0][1]").unwrap();
        let mut walker = PathWalker::new(&path);

        assert!(walker.advance());
        assert!(!walker.advance());
        assert!(!walker.advance());
        assert_eq!(walker.position(), 1);
        assert_eq!(walker.current_index(), Some(1));
    }
}
