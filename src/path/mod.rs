//! Path expression parsing and traversal.
//!
//! # Supported Syntax
//!
//! - `name` - Field of a record or string key of a mapping
//! - `[index]` - Position in a sequence (non-negative only)
//! - `.` - Separates parts; whitespace around parts is ignored
//!
//! A part may combine both forms: `nested[3][4]` is the name `nested`
//! followed by the indices `3` and `4`. A part made only of index groups
//! (`[0]`) indexes into the value produced by the previous part.
//!
//! # Examples
//!
//! ```
//! // users[0].name        - name of the first user
//! // matrix[1][2]         - element of a nested sequence
//! // [4]                  - fifth element of a top-level sequence
//! // field[1].[0].value   - index groups may stand alone between dots
//! ```

pub mod ast;
pub mod error;
pub mod parser;
pub mod walker;

pub use ast::{Path, Step};
pub use error::{ParseError, PartDefect};
pub use parser::Parser;
pub use walker::PathWalker;
