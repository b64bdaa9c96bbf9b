//! File I/O for documents.
//!
//! This module loads JSON, JSONL, YAML and TOML documents (optionally
//! gzip-compressed) from disk or stdin.

pub mod loader;
