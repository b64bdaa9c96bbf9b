use super::ast::KeyPath;
use super::error::ResolveError;
use super::options::ResolveOptions;
use super::tokenizer::tokenize;
use crate::document::node::Value;

/// Walks key paths against a single root value.
///
/// A `Resolver` holds no state beyond the root and the options, so it can be
/// shared freely between threads and reused for many lookups.
pub struct Resolver<'a> {
    root: &'a Value,
    options: ResolveOptions,
}

impl<'a> Resolver<'a> {
    pub fn new(root: &'a Value) -> Self {
        Resolver {
            root,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Tokenizes `path` and walks it from the root.
    pub fn resolve(&self, path: &str) -> Option<&'a Value> {
        let key_path = tokenize(path, self.options.pathsep);
        self.walk(&key_path)
    }

    /// Walks an already tokenized path from the root.
    ///
    /// Returns `None` as soon as a segment cannot be followed; remaining
    /// segments are not looked at.
    pub fn walk(&self, key_path: &KeyPath) -> Option<&'a Value> {
        let mut current = self.root;
        for (depth, segment) in key_path.iter().enumerate() {
            match self.step(current, segment) {
                Some(next) => current = next,
                None => {
                    log::trace!(
                        "path stopped at segment {} ({:?}) of {}",
                        depth,
                        segment,
                        key_path.len()
                    );
                    return None;
                }
            }
        }
        Some(current)
    }

    /// Follows one segment from `node`.
    fn step(&self, node: &'a Value, segment: &str) -> Option<&'a Value> {
        match node {
            Value::Mapping(_) => self.find_key(node, segment),
            Value::Sequence(_) => self.get_element(node, segment),
            _ => None,
        }
    }

    fn find_key(&self, node: &'a Value, key: &str) -> Option<&'a Value> {
        let Value::Mapping(entries) = node else {
            return None;
        };
        if let Some(child) = entries.get(key) {
            return Some(child);
        }
        if !self.options.ignorecase {
            return None;
        }
        // First case-insensitive match in insertion order wins.
        let wanted = key.to_lowercase();
        entries
            .iter()
            .find(|(candidate, _)| candidate.to_lowercase() == wanted)
            .map(|(_, child)| child)
    }

    fn get_element(&self, node: &'a Value, segment: &str) -> Option<&'a Value> {
        let Value::Sequence(items) = node else {
            return None;
        };
        parse_index(segment).and_then(|idx| items.get(idx))
    }
}

/// Parses a segment as a sequence index: ASCII digits only, no sign.
fn parse_index(segment: &str) -> Option<usize> {
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}

/// Resolves `path` against `root`.
///
/// Missing keys, out-of-range or non-numeric indices and attempts to descend
/// into a scalar all give `None`. Anything actually found is returned as is,
/// including `0`, `""`, `false` and `null`.
///
/// # Example
///
/// ```
/// use dictor::document::parser::parse_json;
/// use dictor::document::node::Value;
/// use dictor::keypath::{resolve, ResolveOptions};
///
/// let doc = parse_json(r#"{"Key": {"list": [10, 0]}}"#).unwrap();
/// let options = ResolveOptions::default().ignore_case(true);
///
/// assert_eq!(resolve(&doc, "key.list.1", &options), Some(&Value::from(0)));
/// assert_eq!(resolve(&doc, "key.list.2", &options), None);
/// ```
pub fn resolve<'a>(root: &'a Value, path: &str, options: &ResolveOptions) -> Option<&'a Value> {
    Resolver::new(root).with_options(*options).resolve(path)
}

/// Resolves `path`, falling back to `default` when nothing or `null` is found.
///
/// ```
/// use dictor::document::parser::parse_json;
/// use dictor::document::node::Value;
/// use dictor::keypath::{resolve_or, ResolveOptions};
///
/// let doc = parse_json(r#"{"a": null, "b": 0}"#).unwrap();
/// let fallback = Value::from("n/a");
/// let options = ResolveOptions::default();
///
/// assert_eq!(resolve_or(&doc, "a", &options, &fallback), &fallback);
/// assert_eq!(resolve_or(&doc, "b", &options, &fallback), &Value::from(0));
/// ```
pub fn resolve_or<'a>(
    root: &'a Value,
    path: &str,
    options: &ResolveOptions,
    default: &'a Value,
) -> &'a Value {
    match resolve(root, path, options) {
        Some(value) if !value.is_null() => value,
        _ => default,
    }
}

/// Resolves `path`, reporting missing and null results as errors when
/// `options.checknone` is set.
///
/// Without `checknone` this is [`resolve`] wrapped in `Ok`. Zero-like values
/// are never errors.
///
/// # Errors
///
/// With `checknone` set: [`ResolveError::NotFound`] when nothing is found and
/// [`ResolveError::NullValue`] when the path leads to `null`.
pub fn resolve_checked<'a>(
    root: &'a Value,
    path: &str,
    options: &ResolveOptions,
) -> Result<Option<&'a Value>, ResolveError> {
    let result = resolve(root, path, options);
    if !options.checknone {
        return Ok(result);
    }
    match result {
        None => Err(ResolveError::NotFound {
            path: path.to_string(),
        }),
        Some(Value::Null) => Err(ResolveError::NullValue {
            path: path.to_string(),
        }),
        Some(value) => Ok(Some(value)),
    }
}
