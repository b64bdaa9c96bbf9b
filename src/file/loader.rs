//! Document loading functionality.
//!
//! This module loads documents from files or stdin and converts them into
//! [`Value`] trees ready for path lookups. The format is taken from the file
//! extension; gzip-compressed files (`.gz`) are decompressed transparently.

use crate::document::node::Value;
use crate::document::parser::{from_json_value, parse_json, parse_toml, parse_yaml};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Document formats dictor can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    /// Newline-delimited JSON, loaded as a sequence of lines
    JsonLines,
    Yaml,
    Toml,
}

impl Format {
    /// Determines the format from a file name, looking through a `.gz` suffix.
    ///
    /// Examples:
    /// - `data.json` → `Some(Json)`
    /// - `data.yml.gz` → `Some(Yaml)`
    /// - `data.ndjson` → `Some(JsonLines)`
    /// - `data.txt` → `None`
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path_str = path.as_ref().to_string_lossy().to_lowercase();
        let base = path_str.strip_suffix(".gz").unwrap_or(&path_str);

        if base.ends_with(".jsonl") || base.ends_with(".ndjson") {
            Some(Format::JsonLines)
        } else if base.ends_with(".json") {
            Some(Format::Json)
        } else if base.ends_with(".yaml") || base.ends_with(".yml") {
            Some(Format::Yaml)
        } else if base.ends_with(".toml") {
            Some(Format::Toml)
        } else {
            None
        }
    }

    /// Parses `content` in this format.
    pub fn parse(self, content: &str) -> Result<Value> {
        match self {
            Format::Json => parse_json(content),
            Format::JsonLines => parse_jsonl_content(content),
            Format::Yaml => parse_yaml(content),
            Format::Toml => parse_toml(content),
        }
    }
}

/// Loads and parses a document from the filesystem.
///
/// # Examples
///
/// ```no_run
/// use dictor::file::loader::load_document;
///
/// let doc = load_document("movies.json").unwrap();
/// let year = doc.get_path("robocop.year");
/// ```
///
/// # Errors
///
/// This function will return an error if:
/// - The file path does not exist or cannot be read
/// - A `.gz` file is not valid gzip
/// - The contents cannot be parsed in the detected format (or, for an
///   unknown extension, as JSON, TOML or YAML)
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read file {}", path_ref.display()))?
    };

    match Format::from_path(path_ref) {
        Some(format) => {
            log::debug!("Loading {} as {:?}", path_ref.display(), format);
            format
                .parse(&content)
                .with_context(|| format!("Failed to load {}", path_ref.display()))
        }
        None => {
            log::debug!(
                "No known extension on {}, detecting format",
                path_ref.display()
            );
            parse_any(&content).with_context(|| format!("Failed to load {}", path_ref.display()))
        }
    }
}

/// Loads and parses a document from standard input.
///
/// # Errors
///
/// Returns an error if stdin cannot be read, is empty, or holds a document
/// in none of the supported formats.
pub fn load_from_stdin() -> Result<Value> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    parse_bytes(&buffer).context("Failed to parse stdin")
}

/// Parses raw document bytes of unknown format.
///
/// Gzip input is recognised by its magic bytes (0x1f 0x8b) and decompressed
/// first; the text then goes through [`parse_any`].
///
/// # Errors
///
/// Returns an error if the bytes are corrupt gzip, not UTF-8, blank, or in
/// none of the supported formats.
pub fn parse_bytes(bytes: &[u8]) -> Result<Value> {
    let content = if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(bytes)?
    } else {
        String::from_utf8(bytes.to_vec()).context("Input is not valid UTF-8")?
    };

    parse_any(&content)
}

/// Parses content of unknown format: JSON first, then TOML, then YAML.
///
/// The order goes from strictest to loosest. YAML accepts nearly any text as
/// a plain scalar, so it goes last; a document that is valid TOML and valid
/// YAML at once is read as TOML. Blank input is an error rather than an
/// empty TOML table.
pub fn parse_any(content: &str) -> Result<Value> {
    if content.trim().is_empty() {
        anyhow::bail!("Input is empty");
    }
    if let Ok(value) = parse_json(content) {
        return Ok(value);
    }
    if let Ok(value) = parse_toml(content) {
        return Ok(value);
    }
    parse_yaml(content).context("Input is neither valid JSON, TOML nor YAML")
}

/// Parses JSONL content (newline-delimited JSON) into a sequence.
///
/// Each non-blank line must be a valid JSON value, so `0.name` reaches the
/// `name` field of the first line.
pub fn parse_jsonl_content(content: &str) -> Result<Value> {
    let mut lines = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        lines.push(from_json_value(&value));
    }

    if lines.is_empty() {
        anyhow::bail!("No valid JSON found in JSONL content");
    }

    Ok(Value::Sequence(lines))
}

/// Reads and decompresses a gzipped file.
fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let bytes = fs::read(path).context("Failed to open gzipped file")?;
    decompress_gzip_bytes(&bytes)
}

/// Decompresses gzip-encoded bytes to a UTF-8 string.
fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzip data - input may be corrupted")?;
    Ok(content)
}
