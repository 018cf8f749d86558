//! Setup shared by the `healthbot` and `healthbot-chat` binaries.

use healthbot_core::config::{Config, EngineSettings};
use healthbot_core::KnowledgeBase;
use healthbot_engine::ResponseEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins; otherwise only warnings are shown.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Loads configuration and builds the engine from the compiled-in tables.
pub fn load_engine() -> anyhow::Result<(ResponseEngine, EngineSettings)> {
    let config = Config::load().map_err(|e| { eprintln!("Error loading config: {}", e); e })?;
    let settings = config.engine_settings()?;
    tracing::debug!(?settings, "configuration loaded");
    let engine = ResponseEngine::from_settings(KnowledgeBase::builtin()?, &settings)?;
    Ok((engine, settings))
}

/// Seeded when `engine.chat.seed` is set, OS entropy otherwise.
pub fn choice_rng(settings: &EngineSettings) -> StdRng {
    match settings.chat.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
