//! Stripping of indirection layers.

use log::warn;

use super::shape::{Navigable, Shape};

/// Upper bound on indirection layers followed before giving up.
pub const DEFAULT_MAX_INDIRECTION: usize = 256;

/// Outcome of unwrapping all indirection layers around a value.
#[derive(Debug, Clone, Copy)]
pub enum Layers<'a> {
    /// A value that is not itself an indirection layer.
    Found(&'a dyn Navigable),
    /// A layer holding no value.
    Empty,
    /// An opaque reference; it was not followed.
    Opaque,
    /// More than the allowed number of layers.
    TooDeep,
}

impl<'a> Layers<'a> {
    /// Returns the unwrapped value, treating every other outcome as absent.
    pub fn found(self) -> Option<&'a dyn Navigable> {
        match self {
            Layers::Found(value) => Some(value),
            _ => None,
        }
    }
}

/// Follows indirection layers until a non-indirection value is reached.
///
/// At most `limit` layers are followed; a value that is still an
/// indirection after that yields [`Layers::TooDeep`].
pub fn unwrap_layers(value: &dyn Navigable, limit: usize) -> Layers<'_> {
    let mut current = value;
    for _ in 0..=limit {
        match current.shape() {
            Shape::Indirect(Some(inner)) => current = inner,
            Shape::Indirect(None) => return Layers::Empty,
            Shape::Opaque => return Layers::Opaque,
            _ => return Layers::Found(current),
        }
    }
    warn!("gave up after following {} indirection layers", limit);
    Layers::TooDeep
}

/// Strips all indirection from `value`, or returns `None` when no concrete
/// value is reachable.
///
/// # Example
///
/// ```
/// use dotpath::value::{deref, DEFAULT_MAX_INDIRECTION};
///
/// let nested: Option<Box<Option<i32>>> = Some(Box::new(Some(7)));
/// let inner = deref(&nested, DEFAULT_MAX_INDIRECTION).unwrap();
/// assert_eq!(inner.downcast_ref::<i32>(), Some(&7));
///
/// let empty: Option<Box<i32>> = None;
/// assert!(deref(&empty, DEFAULT_MAX_INDIRECTION).is_none());
/// ```
pub fn deref(value: &dyn Navigable, limit: usize) -> Option<&dyn Navigable> {
    unwrap_layers(value, limit).found()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An indirection layer that points back at itself.
    struct Loop;

    impl Navigable for Loop {
        fn shape(&self) -> Shape<'_> {
            Shape::Indirect(Some(self))
        }
    }

    #[test]
    fn test_plain_value_is_found() {
        let value = 3i64;
        assert!(matches!(unwrap_layers(&value, 0), Layers::Found(_)));
    }

    #[test]
    fn test_layers_up_to_limit_are_followed() {
        let value = Box::new(Box::new(1u8));
        assert!(matches!(unwrap_layers(&value, 2), Layers::Found(_)));
        assert!(matches!(unwrap_layers(&value, 1), Layers::TooDeep));
    }

    #[test]
    fn test_empty_layer_deep_inside() {
        let value: Box<Option<Box<u8>>> = Box::new(None);
        assert!(matches!(unwrap_layers(&value, 8), Layers::Empty));
    }

    #[test]
    fn test_opaque_is_rejected() {
        let x = 1u8;
        let value = Some(&x as *const u8);
        assert!(matches!(unwrap_layers(&value, 8), Layers::Opaque));
        assert!(deref(&value, 8).is_none());
    }

    #[test]
    fn test_cycle_terminates() {
        assert!(matches!(unwrap_layers(&Loop, 64), Layers::TooDeep));
    }
}
