use indexdate::config::Config;
use indexdate::constants::FALLBACK_OUTPUT_FORMAT;
use indexdate::{DateFormatService, PatternSyntax, Zone};

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.format.default_output_format, None);
    assert_eq!(config.format.timezone, "local");
    assert_eq!(config.format.syntax, PatternSyntax::Strftime);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Invalid output pattern should fail
    config.format.default_output_format = Some("%Y-%".to_string());
    assert!(config.validate().is_err());

    // PHP letters are checked against the PHP syntax
    config.format.default_output_format = Some("d.m.Y".to_string());
    config.format.syntax = PatternSyntax::Php;
    assert!(config.validate().is_ok());
    config.format.default_output_format = Some("d.m.Y t".to_string());
    assert!(config.validate().is_err());

    // Reset and test invalid timezone
    config.format = Default::default();
    config.format.timezone = "Atlantis/Capital".to_string();
    assert!(config.validate().is_err());

    // Reset and test invalid log level
    config.format = Default::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_output_format_falls_back() {
    let mut config = Config::default();
    config.format.default_output_format = Some(String::new());
    assert!(config.validate().is_ok());

    let service = DateFormatService::from_config(&config.format).unwrap();
    assert_eq!(service.default_output_format(), None);
    assert_eq!(service.format("2024-01-05 10:00", "%Y-%m-%d %H:%M", "", None), "2024-01-05");
    assert_eq!(
        service.format("2024-01-05 10:00", "%Y-%m-%d %H:%M", FALLBACK_OUTPUT_FORMAT, None),
        "2024-01-05"
    );
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("timezone = \"local\""));
    assert!(toml_str.contains("syntax = \"strftime\""));
    assert!(toml_str.contains("enabled = false"));
}

#[test]
fn test_partial_config_deserialization() {
    // Test that partial TOML configs merge with defaults
    let partial_toml = r#"
[format]
default_output_format = "%d.%m.%Y"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    // Check that specified values are used
    assert_eq!(config.format.default_output_format.as_deref(), Some("%d.%m.%Y"));
    assert!(config.logging.enabled);

    // Check that unspecified values use defaults
    assert_eq!(config.format.timezone, "local");
    assert_eq!(config.format.syntax, PatternSyntax::Strftime);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    // Test that empty TOML uses all defaults
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.format.default_output_format, default_config.format.default_output_format);
    assert_eq!(config.format.timezone, default_config.format.timezone);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_drives_service() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("indexdate_test_load_config");
    let config_path = temp_dir.join("indexdate.toml");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    fs::write(
        &config_path,
        r#"
[format]
default_output_format = "d.m.Y"
timezone = "+01:00"
syntax = "php"
"#,
    )
    .unwrap();

    let config = Config::load_from_file(&config_path).unwrap();
    let service = DateFormatService::from_config(&config.format).unwrap();

    assert_eq!(service.timezone(), Zone::parse("+01:00").unwrap());
    assert_eq!(service.format("2024-01-05T23:30:00Z", "Y-m-d\\TH:i:s\\Z", "", None), "05.01.2024");
    assert_eq!(service.timestamp_to_iso(Some(0)), "1970-01-01T01:00:00Z");

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("indexdate_test_invalid_config");
    let config_path = temp_dir.join("indexdate.toml");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    fs::write(&config_path, "[format]\ntimezone = \"Not/AZone\"\n").unwrap();
    assert!(Config::load_from_file(&config_path).is_err());

    fs::write(&config_path, "[format]\nsyntax = \"cobol\"\n").unwrap();
    assert!(Config::load_from_file(&config_path).is_err());

    assert!(Config::load_from_file(temp_dir.join("missing.toml")).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    // Create a temporary path that doesn't exist
    let temp_dir = std::env::temp_dir().join("indexdate_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    // Ensure the directory doesn't exist initially
    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    // Generate config should create the directory structure
    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    // Verify the directory was created
    assert!(config_path.exists());

    // Verify the file contains expected content and loads back
    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# indexdate Configuration File"));
    assert!(content.contains("timezone = \"local\""));
    assert!(Config::load_from_file(&config_path).is_ok());

    // Clean up
    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_default_config_path() {
    if let Ok(path) = Config::get_default_config_path() {
        assert!(path.ends_with("indexdate/config.toml"));
    }
}
