use std::fs;
use tempfile::TempDir;

use figment::providers::{Format, Toml};
use figment::Figment;
use healthbot_core::config::{expand_path, Config, EngineSettings};
use healthbot_core::types::MatchMode;
use healthbot_core::{Corpus, Error, KnowledgeBase};

#[test]
fn defaults_apply_without_any_file() {
    let config = Config::from_toml_str("");
    let settings = config.engine_settings().expect("settings");
    assert_eq!(settings, EngineSettings::default());
    assert!((settings.similarity.threshold - 0.2).abs() < f64::EPSILON);
    assert_eq!(settings.similarity.max_features, 1000);
    assert_eq!(settings.matching.mode, MatchMode::Substring);
    assert_eq!(settings.chat.seed, None);
}

#[test]
fn toml_overrides_nested_keys() {
    let config = Config::from_toml_str(
        r#"
        [engine.similarity]
        threshold = 0.35
        [engine.matching]
        mode = "word_boundary"
        [engine.chat]
        seed = 42
        "#,
    );
    let settings = config.engine_settings().expect("settings");
    assert!((settings.similarity.threshold - 0.35).abs() < 1e-12);
    assert_eq!(settings.similarity.max_features, 1000, "untouched keys keep defaults");
    assert_eq!(settings.matching.mode, MatchMode::WordBoundary);
    assert_eq!(settings.chat.seed, Some(42));
}

#[test]
fn config_file_on_disk_is_read() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.toml");
    fs::write(&path, "[engine.similarity]\nmax_features = 64\n").unwrap();

    let config = Config::from_figment(Figment::new().merge(Toml::file(&path)));
    let settings = config.engine_settings().expect("settings");
    assert_eq!(settings.similarity.max_features, 64);
    let max: usize = config.get("engine.similarity.max_features").expect("raw get");
    assert_eq!(max, 64);
}

#[test]
fn out_of_range_threshold_is_invalid() {
    let config = Config::from_toml_str("[engine.similarity]\nthreshold = 1.5\n");
    assert!(matches!(config.engine_settings(), Err(Error::InvalidConfig(_))));

    let config = Config::from_toml_str("[engine.similarity]\nmax_features = 0\n");
    assert!(matches!(config.engine_settings(), Err(Error::InvalidConfig(_))));
}

#[test]
fn absolute_paths_expand_to_themselves() {
    assert_eq!(expand_path("/etc/healthbot/config.toml"), std::path::PathBuf::from("/etc/healthbot/config.toml"));
}

#[test]
fn builtin_corpus_is_stable_across_builds() {
    let kb = KnowledgeBase::builtin().expect("kb");
    let a = Corpus::from_knowledge(&kb).expect("corpus a");
    let b = Corpus::from_knowledge(&kb).expect("corpus b");
    assert_eq!(a.documents(), b.documents());
}
