use dictor::config::Config;
use dictor::keypath::ResolveOptions;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert_eq!(config.pathsep, '.');
    assert!(!config.ignorecase);
    assert!(!config.checknone);
    assert!(!config.pretty);
}

#[test]
fn test_serialize_default_config() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).expect("Failed to serialize config");

    assert!(toml_str.contains("pathsep = \".\""));
    assert!(toml_str.contains("ignorecase = false"));
    assert!(toml_str.contains("checknone = false"));
    assert!(toml_str.contains("pretty = false"));
}

#[test]
fn test_deserialize_full_config() {
    let toml_str = r#"
        pathsep = "/"
        ignorecase = true
        checknone = true
        pretty = true
    "#;

    let config: Config = toml::from_str(toml_str).expect("Failed to deserialize config");

    assert_eq!(config.pathsep, '/');
    assert!(config.ignorecase);
    assert!(config.checknone);
    assert!(config.pretty);
}

#[test]
fn test_deserialize_partial_config() {
    // Only specify some fields; others should use defaults
    let config: Config = toml::from_str("ignorecase = true").expect("Failed to deserialize config");

    assert!(config.ignorecase);
    assert_eq!(config.pathsep, '.');
    assert!(!config.checknone);
    assert!(!config.pretty);
}

#[test]
fn test_deserialize_empty_config() {
    let config: Config = toml::from_str("").expect("Failed to deserialize config");
    assert_eq!(config, Config::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let config = Config {
        pathsep: ':',
        pretty: true,
        ..Config::default()
    };

    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "pathsep = \"too long\"\n").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_resolve_options() {
    let config = Config {
        pathsep: '/',
        ignorecase: true,
        ..Config::default()
    };
    assert_eq!(
        config.resolve_options(),
        ResolveOptions::default().with_pathsep('/').ignore_case(true)
    );
}
