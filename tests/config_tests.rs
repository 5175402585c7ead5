// Integration tests for configuration file loading

use std::fs;

use anyhow::Result;
use tempfile::TempDir;
use voxbridge::config::{Config, SpeechConfig};

#[test]
fn test_load_full_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("voxbridge.toml");

    fs::write(
        &path,
        r#"
[service]
name = "voxbridge"

[service.http]
bind = "127.0.0.1"
port = 3900

[speech]
source_language = "de"
target_languages = ["en", "fr"]
"#,
    )?;

    let name = temp_dir.path().join("voxbridge");
    let cfg = Config::load(name.to_str().unwrap())?;

    assert_eq!(cfg.service.name, "voxbridge");
    assert_eq!(cfg.service.http.bind, "127.0.0.1");
    assert_eq!(cfg.service.http.port, 3900);
    assert_eq!(cfg.speech.source_language, "de");
    assert_eq!(cfg.speech.target_languages, vec!["en", "fr"]);

    Ok(())
}

#[test]
fn test_load_missing_file_fails() {
    assert!(Config::load("/nonexistent/voxbridge").is_err());
}

#[test]
fn test_speech_defaults() {
    let defaults = SpeechConfig::default();
    assert_eq!(defaults.source_language, "en");
    assert_eq!(defaults.target_languages, vec!["es"]);
}
