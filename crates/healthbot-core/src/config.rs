//! Lightweight configuration loader.
//!
//! Uses Figment to merge built-in defaults + `config.toml` + `config.<env>.toml`
//! + the file named by `APP_CONFIG_FILE` + `APP_*` env vars (`__` nests keys,
//! e.g. `APP_ENGINE__SIMILARITY__THRESHOLD=0.3`).
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::types::MatchMode;

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::from(Serialized::defaults(Defaults::default())).merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        if let Ok(extra) = env::var("APP_CONFIG_FILE") {
            figment = figment.merge(Toml::file(expand_path(extra)));
        }
        figment = figment.merge(Env::prefixed("APP_").split("__").ignore(&["config_file"]));

        let config = Self { figment };
        config.engine_settings()?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self { Self { figment } }

    /// Defaults overlaid with an inline TOML document.
    pub fn from_toml_str(toml: &str) -> Self {
        Self::from_figment(Figment::from(Serialized::defaults(Defaults::default())).merge(Toml::string(toml)))
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// The validated `engine` section.
    pub fn engine_settings(&self) -> Result<EngineSettings> {
        let settings: EngineSettings = self
            .figment
            .extract_inner("engine")
            .map_err(|e| Error::InvalidConfig(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Default, Serialize)]
struct Defaults {
    engine: EngineSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineSettings {
    pub similarity: SimilaritySettings,
    pub matching: MatchingSettings,
    pub chat: ChatSettings,
}

impl EngineSettings {
    pub fn validate(&self) -> Result<()> {
        let t = self.similarity.threshold;
        if !(0.0..1.0).contains(&t) {
            return Err(Error::InvalidConfig(format!("similarity.threshold must be in [0, 1), got {t}")));
        }
        if self.similarity.max_features == 0 {
            return Err(Error::InvalidConfig("similarity.max_features must be > 0".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimilaritySettings {
    /// A document is returned only when its score is strictly above this.
    pub threshold: f64,
    /// Vocabulary cap, keeping the most frequent corpus terms.
    pub max_features: usize,
}

impl Default for SimilaritySettings {
    fn default() -> Self { Self { threshold: 0.2, max_features: 1000 } }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MatchingSettings {
    pub mode: MatchMode,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChatSettings {
    /// Seeds the CLI's choice source; unset means OS entropy.
    pub seed: Option<u64>,
}

/// Expand a user-provided path string:
/// - Expands leading '~' to the user's home directory
/// - Expands ${VAR} and $VAR environment variables
/// - Returns a PathBuf without attempting to canonicalize
pub fn expand_path<S: AsRef<str>>(input: S) -> PathBuf {
    let s = input.as_ref();
    let expanded_env = shellexpand::env(s).unwrap_or(std::borrow::Cow::Borrowed(s));
    let expanded = shellexpand::tilde(&expanded_env);
    PathBuf::from(expanded.as_ref())
}
