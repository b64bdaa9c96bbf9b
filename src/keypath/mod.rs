//! Key path tokenizing and resolution.
//!
//! A key path names a value inside nested mappings and sequences with a
//! single delimited string. Lookups are tolerant: anything that cannot be
//! followed yields `None` instead of an error.
//!
//! # Syntax
//!
//! - `a.b.c` - Mapping keys separated by the path separator (default `.`)
//! - `items.0` - Numeric segments index into sequences
//! - `1492.year` - Numeric segments are plain keys when the container is a mapping
//! - `dirty\.harry` - A `\` before the separator makes it part of the key
//!
//! # Examples
//!
//! ```
//! // robocop.year           - key "year" under key "robocop"
//! // terminator.1.genre.0   - first genre of the second terminator entry
//! // terminator/1/genre/0   - same, with pathsep '/'
//! ```

pub mod ast;
pub mod error;
pub mod options;
pub mod resolver;
pub mod tokenizer;

pub use ast::KeyPath;
pub use error::ResolveError;
pub use options::ResolveOptions;
pub use resolver::{resolve, resolve_checked, resolve_or, Resolver};
pub use tokenizer::{tokenize, Tokenizer};
