//! Value graphs the resolver can navigate.
//!
//! The resolver never inspects concrete types directly. It only talks to
//! the [`Navigable`] capability traits, which this module implements for:
//!
//! - integers, floats, `bool`, `char`, `String` (scalars)
//! - `Option`, `Box`, `Rc`, `Arc` (indirection layers)
//! - raw pointers and `NonNull` (opaque, never followed)
//! - `Vec`, `VecDeque`, arrays (sequences)
//! - `HashMap`, `BTreeMap`, `IndexMap` (mappings)
//! - `serde_json::Value`, `serde_yaml::Value`
//! - the dynamic [`Value`] union
//!
//! Plain structs opt in through [`impl_record!`](crate::impl_record).

pub mod deref;
mod impls;
mod macros;
pub mod node;
mod serde_impls;
pub mod serialize;
pub mod shape;

pub use deref::{deref, unwrap_layers, Layers, DEFAULT_MAX_INDIRECTION};
pub use node::Value;
pub use serialize::Serializable;
pub use shape::{AsMapKey, Entries, MapKey, Mapping, Navigable, Record, Scalar, Sequence, Shape};
