//! Step and path types produced by the path parser.

use std::fmt;

/// A single navigation step in a path expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// Named field or mapping key (`name`)
    Name(String),
    /// Sequence position (`[3]`)
    Index(usize),
}

impl Step {
    /// Returns true if this step addresses a sequence position.
    pub fn is_index(&self) -> bool {
        matches!(self, Step::Index(_))
    }

    /// Returns the field/key name for a named step.
    pub fn name(&self) -> Option<&str> {
        match self {
            Step::Name(name) => Some(name),
            Step::Index(_) => None,
        }
    }

    /// Returns the position for an index step.
    pub fn index(&self) -> Option<usize> {
        match self {
            Step::Index(index) => Some(*index),
            Step::Name(_) => None,
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Name(name) => write!(f, "{}", name),
            Step::Index(index) => write!(f, "[{}]", index),
        }
    }
}

/// A parsed path expression.
///
/// A `Path` always holds at least one step. It is immutable once parsed and
/// can be reused for any number of resolutions; traversal state lives in a
/// separate [`PathWalker`](super::PathWalker).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    pub(crate) fn from_steps(steps: Vec<Step>) -> Self {
        debug_assert!(!steps.is_empty());
        Self { steps }
    }

    /// Returns the parsed steps in traversal order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Returns the number of steps.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 && !step.is_index() {
                f.write_str(".")?;
            }
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
