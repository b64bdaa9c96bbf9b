//! Errors reported by strict resolution.

use thiserror::Error;

/// Reasons `resolve_checked` refuses a result when `checknone` is set.
///
/// Plain resolution never produces these; it folds every miss into `None`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Nothing was found at the path.
    #[error("no value found at path '{path}'")]
    NotFound { path: String },
    /// The path resolved to an explicit null.
    #[error("value at path '{path}' is null")]
    NullValue { path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ResolveError::NotFound {
            path: "a.b".to_string(),
        };
        assert_eq!(err.to_string(), "no value found at path 'a.b'");

        let err = ResolveError::NullValue {
            path: "x".to_string(),
        };
        assert_eq!(err.to_string(), "value at path 'x' is null");
    }
}
