//! Dictor - tolerant path-based lookups into nested data.
//!
//! Dictor takes a nested document (mappings, sequences and scalars, as
//! parsed from JSON, YAML or TOML) and returns the value at a delimited key
//! path such as `"terminator.1.genre.0"`. Missing keys, out-of-range indices
//! and attempts to descend into scalars all give `None` rather than an error,
//! so lookups into large loosely structured documents need no defensive
//! matching at every level.
//!
//! ```
//! use dictor::document::parser::parse_json;
//! use dictor::{resolve, ResolveOptions, Value};
//!
//! let doc = parse_json(r#"{"Dirty.Harry": {"genre": "romance"}}"#).unwrap();
//! let options = ResolveOptions::default().ignore_case(true);
//!
//! assert_eq!(
//!     resolve(&doc, r"dirty\.harry.genre", &options),
//!     Some(&Value::from("romance"))
//! );
//! assert_eq!(resolve(&doc, "dirty.harry.genre", &options), None);
//! ```

pub mod config;
pub mod document;
pub mod file;
pub mod keypath;

pub use document::node::{Number, Value};
pub use keypath::{resolve, resolve_checked, resolve_or, ResolveError, ResolveOptions, Resolver};
