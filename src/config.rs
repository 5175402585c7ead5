use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub speech: SpeechConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

/// Locale defaults applied when a start request omits language settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechConfig {
    /// Language key for the recognizer source locale.
    pub source_language: String,
    /// Language keys for translation targets.
    pub target_languages: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            target_languages: vec!["es".to_string()],
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
