//! Capability traits used by the resolver to look inside values.
//!
//! A value graph is anything implementing [`Navigable`]. Each value reports a
//! [`Shape`] describing how it can be navigated: as a record with named
//! fields, as a mapping with keyed entries, as a sequence, as a scalar leaf,
//! as an indirection layer wrapping another value, or as an opaque reference
//! that must never be followed.

use std::any::Any;
use std::fmt;

/// A value the resolver can navigate.
///
/// # Example
///
/// ```
/// use dotpath::value::{Navigable, Scalar, Shape};
///
/// struct Celsius(f64);
///
/// impl Navigable for Celsius {
///     fn shape(&self) -> Shape<'_> {
///         Shape::Scalar(Scalar::Float(self.0))
///     }
/// }
/// ```
pub trait Navigable: Any {
    /// Describes how this value can be navigated.
    fn shape(&self) -> Shape<'_>;
}

impl dyn Navigable {
    /// Returns the value as `T` if it is of that concrete type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        let any: &dyn Any = self;
        any.downcast_ref::<T>()
    }

    /// Returns true if the value is of concrete type `T`.
    pub fn is<T: Any>(&self) -> bool {
        let any: &dyn Any = self;
        any.is::<T>()
    }

    /// Returns the scalar payload, if this value is a scalar.
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self.shape() {
            Shape::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }
}

impl fmt::Debug for dyn Navigable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.shape().kind_name())
    }
}

/// The navigable form of a value.
pub enum Shape<'a> {
    /// Named-field container (a struct).
    Record(&'a dyn Record),
    /// Keyed container without a meaningful order.
    Mapping(&'a dyn Mapping),
    /// Ordered, positionally indexed container.
    Sequence(&'a dyn Sequence),
    /// A leaf value.
    Scalar(Scalar<'a>),
    /// A wrapper around another value; `None` when no value is present.
    Indirect(Option<&'a dyn Navigable>),
    /// A raw-memory reference. Never dereferenced.
    Opaque,
}

impl Shape<'_> {
    /// Returns a short lowercase name for the shape.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Record(_) => "record",
            Shape::Mapping(_) => "mapping",
            Shape::Sequence(_) => "sequence",
            Shape::Scalar(_) => "scalar",
            Shape::Indirect(Some(_)) => "indirect",
            Shape::Indirect(None) => "empty",
            Shape::Opaque => "opaque",
        }
    }

    /// Returns true for records, mappings and sequences.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            Shape::Record(_) | Shape::Mapping(_) | Shape::Sequence(_)
        )
    }
}

/// Leaf payload of a scalar value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(char),
    Str(&'a str),
}

impl fmt::Display for Scalar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Uint(u) => write!(f, "{}", u),
            Scalar::Float(fl) => write!(f, "{}", fl),
            Scalar::Char(c) => write!(f, "{}", c),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

/// A value with named fields.
pub trait Record {
    /// Returns the field called `name`, or `None` if there is no such field.
    fn field(&self, name: &str) -> Option<&dyn Navigable>;

    /// Returns the field names in declaration order.
    fn field_names(&self) -> Vec<&str>;
}

/// The key of a mapping entry, as seen by the resolver.
///
/// Only [`MapKey::Str`] keys can be addressed by a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKey<'a> {
    Str(&'a str),
    Int(i64),
    Bool(bool),
    /// Any key without a string form (floats, composite keys, ...).
    Other,
}

impl<'a> MapKey<'a> {
    /// Returns the key text for string keys.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            MapKey::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// Entry iterator returned by [`Mapping::entries`].
pub type Entries<'a> = Box<dyn Iterator<Item = (MapKey<'a>, &'a dyn Navigable)> + 'a>;

/// A value with keyed entries.
pub trait Mapping {
    /// Iterates all entries. Order is unspecified.
    fn entries(&self) -> Entries<'_>;

    /// Finds the entry whose key is the string `key`.
    fn lookup(&self, key: &str) -> Option<&dyn Navigable> {
        self.entries()
            .find_map(|(k, v)| (k.as_str() == Some(key)).then_some(v))
    }

    /// Returns the number of entries.
    fn len(&self) -> usize {
        self.entries().count()
    }
}

/// A value with positionally indexed elements.
pub trait Sequence {
    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns the element at `index`, or `None` when out of bounds.
    fn element(&self, index: usize) -> Option<&dyn Navigable>;

    /// Returns true if the sequence has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Conversion of map key types into a [`MapKey`].
pub trait AsMapKey {
    fn as_map_key(&self) -> MapKey<'_>;
}
