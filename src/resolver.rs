//! Resolution of path expressions against value graphs.
//!
//! The resolver walks a parsed [`Path`] one step at a time. At every level
//! it strips indirection layers, then applies the current step: a named step
//! looks up a record field or a string mapping key, an index step picks a
//! sequence element. Anything that cannot be found (missing field, missing
//! key, index out of range, an empty layer, a step that does not fit the
//! shape of the value) makes the whole result absent. Only a bad root value
//! or a malformed path is an error.
//!
//! Resolution borrows the graph immutably for the duration of the call. Graphs
//! that hand out data through interior mutability are not read atomically:
//! callers that mutate concurrently must synchronize or snapshot first.

use std::any::{type_name, Any};

use log::{debug, trace};
use thiserror::Error;

use crate::path::{ParseError, Path, PathWalker, Step};
use crate::value::{unwrap_layers, Layers, Navigable, Shape, DEFAULT_MAX_INDIRECTION};

/// Errors returned before any traversal takes place.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The root is empty, opaque, or buried under too many layers.
    #[error("invalid data arg")]
    InvalidData,
    /// The root is not a record, mapping or sequence.
    #[error("data arg must be a struct, map, array or slice")]
    UnsupportedData,
    /// The path expression is malformed.
    #[error(transparent)]
    Path(#[from] ParseError),
    /// The value was found but is not of the requested type.
    #[error("value at \"{path}\" is not a {expected}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
    },
}

/// Resolves path expressions against [`Navigable`] values.
#[derive(Debug, Clone, Copy)]
pub struct Resolver {
    max_indirection: usize,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Creates a resolver following at most [`DEFAULT_MAX_INDIRECTION`]
    /// indirection layers per level.
    pub fn new() -> Self {
        Self {
            max_indirection: DEFAULT_MAX_INDIRECTION,
        }
    }

    /// Sets how many indirection layers are followed per level.
    pub fn with_max_indirection(mut self, max_indirection: usize) -> Self {
        self.max_indirection = max_indirection;
        self
    }

    pub fn max_indirection(&self) -> usize {
        self.max_indirection
    }

    /// Resolves `path` against `data`.
    ///
    /// Returns `Ok(None)` when the path leads nowhere.
    ///
    /// # Errors
    ///
    /// - [`ResolveError::InvalidData`] if `data` is an empty layer, an opaque
    ///   reference, or nests too many layers
    /// - [`ResolveError::UnsupportedData`] if `data` is not a record, mapping
    ///   or sequence once unwrapped
    /// - [`ResolveError::Path`] if `path` does not parse
    pub fn resolve<'a>(
        &self,
        path: &str,
        data: &'a dyn Navigable,
    ) -> Result<Option<&'a dyn Navigable>, ResolveError> {
        debug!("resolving \"{}\"", path);
        let root = self.root(data)?;
        let path = Path::parse(path).inspect_err(|err| debug!("rejected path: {}", err))?;
        Ok(self.descend(root, PathWalker::new(&path)))
    }

    /// Resolves an already parsed path against `data`.
    pub fn resolve_path<'a>(
        &self,
        path: &Path,
        data: &'a dyn Navigable,
    ) -> Result<Option<&'a dyn Navigable>, ResolveError> {
        debug!("resolving \"{}\"", path);
        let root = self.root(data)?;
        Ok(self.descend(root, PathWalker::new(path)))
    }

    /// Resolves `path` and downcasts the result to `T`.
    ///
    /// # Errors
    ///
    /// Same as [`Resolver::resolve`], plus [`ResolveError::TypeMismatch`] when
    /// a value is found but is not a `T`.
    pub fn resolve_as<'a, T: Any>(
        &self,
        path: &str,
        data: &'a dyn Navigable,
    ) -> Result<Option<&'a T>, ResolveError> {
        match self.resolve(path, data)? {
            None => Ok(None),
            Some(found) => match found.downcast_ref::<T>() {
                Some(value) => Ok(Some(value)),
                None => Err(ResolveError::TypeMismatch {
                    path: path.to_string(),
                    expected: type_name::<T>(),
                }),
            },
        }
    }

    /// Validates the root value and strips its indirection.
    fn root<'a>(&self, data: &'a dyn Navigable) -> Result<&'a dyn Navigable, ResolveError> {
        if let Shape::Indirect(None) = data.shape() {
            debug!("rejected data: root holds no value");
            return Err(ResolveError::InvalidData);
        }

        let root = match unwrap_layers(data, self.max_indirection) {
            Layers::Found(root) => root,
            Layers::Empty => {
                debug!("rejected data: root points to no value");
                return Err(ResolveError::UnsupportedData);
            }
            Layers::Opaque | Layers::TooDeep => {
                debug!("rejected data: root is not dereferenceable");
                return Err(ResolveError::InvalidData);
            }
        };

        if !root.shape().is_container() {
            debug!("rejected data: root is a {}", root.shape().kind_name());
            return Err(ResolveError::UnsupportedData);
        }

        Ok(root)
    }

    /// Applies the current step to an already unwrapped value and continues
    /// with the next one.
    fn descend<'a>(
        &self,
        value: &'a dyn Navigable,
        mut walker: PathWalker<'_>,
    ) -> Option<&'a dyn Navigable> {
        let step = walker.current();
        trace!(
            "step {} `{}` on {}",
            walker.position(),
            step,
            value.shape().kind_name()
        );

        let child = match (step, value.shape()) {
            (Step::Name(name), Shape::Record(record)) => record.field(name),
            (Step::Name(name), Shape::Mapping(mapping)) => mapping.lookup(name),
            (Step::Index(index), Shape::Sequence(sequence)) => {
                if sequence.is_empty() || *index >= sequence.len() {
                    None
                } else {
                    sequence.element(*index)
                }
            }
            _ => None,
        };

        let Some(child) = child.and_then(|child| self.unwrap(child)) else {
            trace!("absent at step {} `{}`", walker.position(), step);
            return None;
        };

        if walker.advance() {
            self.descend(child, walker)
        } else {
            Some(child)
        }
    }

    fn unwrap<'a>(&self, value: &'a dyn Navigable) -> Option<&'a dyn Navigable> {
        unwrap_layers(value, self.max_indirection).found()
    }
}

/// Resolves `path` against `data` with a default [`Resolver`].
///
/// # Example
///
/// ```
/// use dotpath::value::Value;
///
/// let data = Value::record([(
///     "servers",
///     Value::list([Value::record([("host", Value::from("db1"))])]),
/// )]);
///
/// let host = dotpath::resolve("servers[0].host", &data).unwrap().unwrap();
/// assert_eq!(host.downcast_ref::<Value>(), Some(&Value::from("db1")));
///
/// assert!(dotpath::resolve("servers[3].host", &data).unwrap().is_none());
/// ```
pub fn resolve<'a>(
    path: &str,
    data: &'a dyn Navigable,
) -> Result<Option<&'a dyn Navigable>, ResolveError> {
    Resolver::new().resolve(path, data)
}

/// Resolves `path` against `data` and downcasts the result to `T`.
pub fn resolve_as<'a, T: Any>(
    path: &str,
    data: &'a dyn Navigable,
) -> Result<Option<&'a T>, ResolveError> {
    Resolver::new().resolve_as(path, data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn sample() -> Value {
        Value::record([
            ("name", Value::from("test")),
            ("items", Value::list(["a", "b", "c"])),
            ("empty", Value::List(vec![])),
        ])
    }

    #[test]
    fn test_descend_stops_on_last_step() {
        let data = sample();
        let found = resolve("items[2]", &data).unwrap().unwrap();
        assert_eq!(found.downcast_ref::<Value>(), Some(&Value::from("c")));
    }

    #[test]
    fn test_empty_sequence_is_absent() {
        let data = sample();
        assert!(resolve("empty[0]", &data).unwrap().is_none());
    }

    #[test]
    fn test_scalar_with_remaining_steps_is_absent() {
        let data = sample();
        assert!(resolve("name.length", &data).unwrap().is_none());
        assert!(resolve("name[0]", &data).unwrap().is_none());
    }

    #[test]
    fn test_low_indirection_limit() {
        let data = Value::reference(Value::reference(sample()));
        let shallow = Resolver::new().with_max_indirection(1);
        assert_eq!(
            shallow.resolve("name", &data).unwrap_err(),
            ResolveError::InvalidData
        );
        assert!(Resolver::new().resolve("name", &data).unwrap().is_some());
    }

    #[test]
    fn test_resolve_as_type_mismatch() {
        let data = vec![1i64, 2, 3];
        assert_eq!(resolve_as::<i64>("[1]", &data).unwrap(), Some(&2));
        assert!(matches!(
            resolve_as::<String>("[1]", &data),
            Err(ResolveError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn test_resolve_path_reuses_parsed_path() {
        let path = Path::parse("[0]").unwrap();
        let first = vec!["x"];
        let second = vec!["y"];
        let resolver = Resolver::new();
        let a = resolver.resolve_path(&path, &first).unwrap().unwrap();
        let b = resolver.resolve_path(&path, &second).unwrap().unwrap();
        assert_eq!(a.downcast_ref::<&str>(), Some(&"x"));
        assert_eq!(b.downcast_ref::<&str>(), Some(&"y"));
    }
}
