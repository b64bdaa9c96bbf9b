use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, IsTerminal};
use std::process;

use dictor::config::Config;
use dictor::document::node::Value;
use dictor::document::parser::parse_json;
use dictor::file::loader::{load_document, load_from_stdin};
use dictor::keypath::{resolve, resolve_checked, resolve_or, ResolveOptions};

/// Dictor - look up a value in a JSON, YAML or TOML document by key path
#[derive(Parser)]
#[command(name = "dictor")]
#[command(version)]
#[command(about = "Look up a value in a nested document by key path", long_about = None)]
struct Cli {
    /// Key path to look up, e.g. "terminator.1.genre.0"
    path: String,

    /// Document to read (omit or use "-" to read stdin)
    file: Option<String>,

    /// Path separator character (default: '.')
    #[arg(short = 's', long)]
    pathsep: Option<char>,

    /// Match keys case-insensitively
    #[arg(short, long, overrides_with = "no_ignorecase")]
    ignorecase: bool,

    /// Match keys exactly, even if the config file enables ignorecase
    #[arg(long, overrides_with = "ignorecase")]
    no_ignorecase: bool,

    /// Fail when the value is missing or null
    #[arg(long, overrides_with = "no_checknone")]
    checknone: bool,

    /// Print missing values as null, even if the config file enables checknone
    #[arg(long, overrides_with = "checknone")]
    no_checknone: bool,

    /// Value printed when nothing (or null) is found; parsed as JSON, else taken as a string
    #[arg(short, long)]
    default: Option<String>,

    /// Pretty-print the result
    #[arg(short, long)]
    pretty: bool,
}

impl Cli {
    /// CLI flags override the config file.
    fn resolve_options(&self, config: &Config) -> ResolveOptions {
        let mut options = config.resolve_options();
        if let Some(pathsep) = self.pathsep {
            options.pathsep = pathsep;
        }
        if self.ignorecase {
            options.ignorecase = true;
        } else if self.no_ignorecase {
            options.ignorecase = false;
        }
        if self.checknone {
            options.checknone = true;
        } else if self.no_checknone {
            options.checknone = false;
        }
        options
    }
}

fn parse_default(raw: &str) -> Value {
    parse_json(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn render(value: &Value, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.context("Failed to render result")
}

/// Resolves `path` and renders the result.
///
/// Returns the text to print and the process exit code: `1` when nothing was
/// found and no default applies, `0` otherwise. With `checknone` set, a
/// missing or null value is an error instead.
fn lookup(
    document: &Value,
    path: &str,
    options: &ResolveOptions,
    default: Option<&str>,
    pretty: bool,
) -> Result<(String, i32)> {
    let found = if let Some(raw) = default {
        let fallback = parse_default(raw);
        let value = resolve_or(document, path, options, &fallback);
        return Ok((render(value, pretty)?, 0));
    } else if options.checknone {
        resolve_checked(document, path, options)?
    } else {
        resolve(document, path, options)
    };

    match found {
        Some(value) => Ok((render(value, pretty)?, 0)),
        None => Ok(("null".to_string(), 1)),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load();
    let options = cli.resolve_options(&config);
    let pretty = cli.pretty || config.pretty;

    let document = match cli.file.as_deref() {
        None if io::stdin().is_terminal() => {
            anyhow::bail!("No document given: pass a FILE or pipe a document on stdin (see --help)")
        }
        None | Some("-") => load_from_stdin()?,
        Some(file_path) => load_document(file_path)?,
    };
    log::debug!("Resolving {:?} with {:?}", cli.path, options);

    let (output, exit_code) = lookup(
        &document,
        &cli.path,
        &options,
        cli.default.as_deref(),
        pretty,
    )?;
    println!("{}", output);
    if exit_code != 0 {
        process::exit(exit_code);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default() {
        assert_eq!(parse_default("5"), Value::from(5));
        assert_eq!(parse_default("n/a"), Value::from("n/a"));
        assert_eq!(parse_default(r#""quoted""#), Value::from("quoted"));
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from(["dictor", "a/b", "doc.json", "-s", "/", "--checknone"]);
        let config = Config {
            ignorecase: true,
            ..Config::default()
        };
        let options = cli.resolve_options(&config);
        assert_eq!(options.pathsep, '/');
        assert!(options.ignorecase);
        assert!(options.checknone);
        assert_eq!(cli.file.as_deref(), Some("doc.json"));
    }

    #[test]
    fn test_cli_can_switch_off_config_flags() {
        let cli = Cli::parse_from(["dictor", "key", "--no-ignorecase", "--no-checknone"]);
        let config = Config {
            ignorecase: true,
            checknone: true,
            ..Config::default()
        };
        let options = cli.resolve_options(&config);
        assert!(!options.ignorecase);
        assert!(!options.checknone);
    }

    #[test]
    fn test_last_of_paired_flags_wins() {
        let cli = Cli::parse_from(["dictor", "key", "--no-ignorecase", "-i"]);
        assert!(cli.resolve_options(&Config::default()).ignorecase);

        let cli = Cli::parse_from(["dictor", "key", "-i", "--no-ignorecase"]);
        let config = Config {
            ignorecase: true,
            ..Config::default()
        };
        assert!(!cli.resolve_options(&config).ignorecase);
    }

    #[test]
    fn test_config_applies_without_flags() {
        let cli = Cli::parse_from(["dictor", "Key"]);
        let config = Config {
            pathsep: '/',
            ignorecase: true,
            ..Config::default()
        };
        let options = cli.resolve_options(&config);
        assert_eq!(options.pathsep, '/');
        assert!(options.ignorecase);
        assert!(!options.checknone);
    }

    fn sample() -> Value {
        parse_json(r#"{"a": {"n": null, "zero": 0, "Name": "dictor"}}"#).unwrap()
    }

    #[test]
    fn test_lookup_found() {
        let doc = sample();
        let options = ResolveOptions::default();
        assert_eq!(
            lookup(&doc, "a.Name", &options, None, false).unwrap(),
            (r#""dictor""#.to_string(), 0)
        );
        assert_eq!(
            lookup(&doc, "a.zero", &options, None, false).unwrap(),
            ("0".to_string(), 0)
        );
    }

    #[test]
    fn test_lookup_absent_prints_null_and_fails() {
        let doc = sample();
        let options = ResolveOptions::default();
        assert_eq!(
            lookup(&doc, "a.missing", &options, None, false).unwrap(),
            ("null".to_string(), 1)
        );
    }

    #[test]
    fn test_lookup_stored_null_succeeds() {
        let doc = sample();
        let options = ResolveOptions::default();
        assert_eq!(
            lookup(&doc, "a.n", &options, None, false).unwrap(),
            ("null".to_string(), 0)
        );
    }

    #[test]
    fn test_lookup_checknone_errors() {
        let doc = sample();
        let options = ResolveOptions::default().check_none(true);

        let err = lookup(&doc, "a.n", &options, None, false).unwrap_err();
        assert_eq!(err.to_string(), "value at path 'a.n' is null");

        let err = lookup(&doc, "a.missing", &options, None, false).unwrap_err();
        assert_eq!(err.to_string(), "no value found at path 'a.missing'");

        assert_eq!(
            lookup(&doc, "a.zero", &options, None, false).unwrap(),
            ("0".to_string(), 0)
        );
    }

    #[test]
    fn test_lookup_default_wins_over_miss() {
        let doc = sample();
        let options = ResolveOptions::default();
        assert_eq!(
            lookup(&doc, "a.missing", &options, Some("n/a"), false).unwrap(),
            (r#""n/a""#.to_string(), 0)
        );
        assert_eq!(
            lookup(&doc, "a.n", &options, Some("7"), false).unwrap(),
            ("7".to_string(), 0)
        );

        let strict = options.check_none(true);
        assert_eq!(
            lookup(&doc, "a.missing", &strict, Some("[]"), false).unwrap(),
            ("[]".to_string(), 0)
        );
    }

    #[test]
    fn test_lookup_pretty() {
        let doc = sample();
        let (output, code) = lookup(&doc, "a", &ResolveOptions::default(), None, true).unwrap();
        assert_eq!(code, 0);
        assert!(output.contains("\n  \"zero\": 0"));
    }

    #[test]
    fn test_render() {
        let value = parse_json(r#"{"a": [1, 2]}"#).unwrap();
        assert_eq!(render(&value, false).unwrap(), r#"{"a":[1,2]}"#);
        assert!(render(&value, true).unwrap().contains('\n'));
    }
}
