//! Escape-aware splitting of path strings into segments.

use super::ast::KeyPath;

/// Marker that makes the following separator part of a segment.
pub const ESCAPE: char = '\\';

/// Single-pass scanner over a path string.
///
/// A separator splits the path unless it directly follows [`ESCAPE`]. An
/// escape marker in front of anything else is kept as a literal character,
/// so `a\b` stays `a\b`. Empty segments are skipped.
pub struct Tokenizer<'a> {
    input: &'a str,
    pathsep: char,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer for `input` splitting on `pathsep`.
    pub fn new(input: &'a str, pathsep: char) -> Self {
        Self { input, pathsep }
    }

    /// Scans the whole input into a `KeyPath`.
    pub fn tokenize(&self) -> KeyPath {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut escaped = false;

        for ch in self.input.chars() {
            if escaped {
                escaped = false;
                if ch != self.pathsep {
                    current.push(ESCAPE);
                }
                current.push(ch);
            } else if ch == self.pathsep {
                Self::flush(&mut current, &mut segments);
            } else if ch == ESCAPE {
                escaped = true;
            } else {
                current.push(ch);
            }
        }

        // Trailing escape marker with nothing to escape.
        if escaped {
            current.push(ESCAPE);
        }
        Self::flush(&mut current, &mut segments);

        KeyPath::new(segments)
    }

    fn flush(current: &mut String, segments: &mut Vec<String>) {
        if !current.is_empty() {
            segments.push(std::mem::take(current));
        }
    }
}

/// Splits `path` on `pathsep`, honouring escaped separators.
///
/// # Example
///
/// ```
/// use dictor::keypath::tokenize;
///
/// let path = tokenize(r"dirty\.harry.genre", '.');
/// assert_eq!(path.segments, vec!["dirty.harry", "genre"]);
/// ```
pub fn tokenize(path: &str, pathsep: char) -> KeyPath {
    Tokenizer::new(path, pathsep).tokenize()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(path: &str, sep: char) -> Vec<String> {
        tokenize(path, sep).segments
    }

    #[test]
    fn test_simple_split() {
        assert_eq!(segments("a.b.0.c", '.'), vec!["a", "b", "0", "c"]);
    }

    #[test]
    fn test_single_segment() {
        assert_eq!(segments("robocop", '.'), vec!["robocop"]);
    }

    #[test]
    fn test_empty_path() {
        assert!(tokenize("", '.').is_empty());
        assert!(tokenize("...", '.').is_empty());
    }

    #[test]
    fn test_empty_segments_skipped() {
        assert_eq!(segments(".a..b.", '.'), vec!["a", "b"]);
    }

    #[test]
    fn test_escaped_separator() {
        assert_eq!(segments(r"a\.b", '.'), vec!["a.b"]);
        assert_eq!(segments(r"x.a\.b\.c.y", '.'), vec!["x", "a.b.c", "y"]);
    }

    #[test]
    fn test_escape_before_other_char_is_literal() {
        assert_eq!(segments(r"a\b.c", '.'), vec![r"a\b", "c"]);
    }

    #[test]
    fn test_trailing_escape() {
        assert_eq!(segments(r"a.b\", '.'), vec!["a", r"b\"]);
    }

    #[test]
    fn test_double_escape_then_separator() {
        // The first marker escapes the second, which is not a separator.
        assert_eq!(segments(r"a\\.b", '.'), vec![r"a\\", "b"]);
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(
            segments("terminator/1/terminator 2/genre/0", '/'),
            vec!["terminator", "1", "terminator 2", "genre", "0"]
        );
        assert_eq!(segments("dirty.harry/genre", '/'), vec!["dirty.harry", "genre"]);
    }

    #[test]
    fn test_escaped_custom_separator() {
        assert_eq!(segments(r"a\/b/c", '/'), vec!["a/b", "c"]);
        // A default separator is not special under a custom one.
        assert_eq!(segments(r"a\.b", '/'), vec![r"a\.b"]);
    }

    #[test]
    fn test_multibyte_characters() {
        assert_eq!(segments("café→menü", '→'), vec!["café", "menü"]);
    }

    #[test]
    fn test_random_characters() {
        assert_eq!(
            segments("#.random,,,@.chars", '.'),
            vec!["#", "random,,,@", "chars"]
        );
    }
}
