//! Format-independent document model.
//!
//! [`node`] defines the [`Value`](node::Value) tree every lookup walks, and
//! [`parser`] converts JSON, YAML and TOML text into it.

pub mod node;
pub mod parser;

pub use node::{Number, Value};
