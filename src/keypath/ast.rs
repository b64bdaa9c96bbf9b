//! Tokenized form of a key path.

/// An ordered list of segments produced by the tokenizer.
///
/// Segments are never empty and never contain escape markers: an escaped
/// separator has already been turned into a literal character.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyPath {
    /// Segments that make up the path.
    pub segments: Vec<String>,
}

impl KeyPath {
    /// Creates a new KeyPath with the given segments.
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.segments.iter()
    }
}

impl<'a> IntoIterator for &'a KeyPath {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
