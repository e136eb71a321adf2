//! dotpath - resolve dotted/bracketed path expressions against value graphs.
//!
//! Given a path such as `spec.containers[0].image` and any value implementing
//! [`value::Navigable`], [`resolve`] returns the value found at that path,
//! `None` when the data along the path is missing, or an error when the root
//! value or the path itself is unusable.
//!
//! ```
//! use dotpath::impl_record;
//!
//! struct Container { image: String }
//! struct Spec { containers: Vec<Container> }
//! impl_record!(Container { image });
//! impl_record!(Spec { containers });
//!
//! let spec = Spec {
//!     containers: vec![Container { image: "nginx:1.27".to_string() }],
//! };
//!
//! let image = dotpath::resolve_as::<String>("containers[0].image", &spec).unwrap();
//! assert_eq!(image.map(String::as_str), Some("nginx:1.27"));
//! ```

pub mod config;
pub mod file;
pub mod output;
pub mod path;
pub mod resolver;
pub mod value;

pub use path::{ParseError, Path, PathWalker, Step};
pub use resolver::{resolve, resolve_as, ResolveError, Resolver};
pub use value::{Navigable, Value};
