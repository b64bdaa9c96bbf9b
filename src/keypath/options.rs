//! Options controlling how a path is resolved.

use serde::{Deserialize, Serialize};

/// Resolution options.
///
/// All fields have defaults, so an empty TOML table or `ResolveOptions::default()`
/// gives plain `.`-separated, case-sensitive lookups.
///
/// # Fields
///
/// * `pathsep` - Character splitting the path into segments (default: `.`)
/// * `ignorecase` - Match mapping keys case-insensitively when no exact key exists (default: false)
/// * `checknone` - Zero-like results are intentional; `resolve_checked` reports
///   missing and null results as errors (default: false)
///
/// # Example
///
/// ```
/// use dictor::keypath::ResolveOptions;
///
/// let options = ResolveOptions::default().with_pathsep('/').ignore_case(true);
/// assert_eq!(options.pathsep, '/');
/// assert!(options.ignorecase);
/// assert!(!options.checknone);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolveOptions {
    #[serde(default = "default_pathsep")]
    pub pathsep: char,

    #[serde(default)]
    pub ignorecase: bool,

    #[serde(default)]
    pub checknone: bool,
}

/// Returns the default path separator.
pub fn default_pathsep() -> char {
    '.'
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            pathsep: default_pathsep(),
            ignorecase: false,
            checknone: false,
        }
    }
}

impl ResolveOptions {
    pub fn with_pathsep(mut self, pathsep: char) -> Self {
        self.pathsep = pathsep;
        self
    }

    pub fn ignore_case(mut self, ignorecase: bool) -> Self {
        self.ignorecase = ignorecase;
        self
    }

    pub fn check_none(mut self, checknone: bool) -> Self {
        self.checknone = checknone;
        self
    }
}
