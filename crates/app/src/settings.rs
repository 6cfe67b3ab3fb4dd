use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/arto.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub session_file: String,
    pub level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            session_file: "config/session.json".to_string(),
            level: "info".to_string(),
        }
    }
}

/// Config file (optional), then `ARTO_*` env vars, then flag overrides.
pub fn load(
    config_path: Option<&str>,
    base_url: Option<&str>,
    session_file: Option<&str>,
) -> Result<Settings> {
    let config_path = config_path.unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("ARTO"));
    let mut settings: Settings = builder.build()?.try_deserialize()?;

    if let Some(base_url) = base_url {
        settings.base_url = base_url.to_string();
    }
    if let Some(session_file) = session_file {
        settings.session_file = session_file.to_string();
    }

    Ok(settings)
}
