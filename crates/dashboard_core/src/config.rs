use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{cards::DEFAULT_REVEAL_STAGGER_MS, count_up::CountUpTiming, navigation::DEFAULT_SIDEBAR_BREAKPOINT};

pub const DEFAULT_SETTINGS_FILE: &str = "dashboard.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_filter: String,
    pub reveal_stagger_ms: u64,
    pub count_up: CountUpTiming,
    pub sidebar_breakpoint: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_filter: "info".into(),
            reveal_stagger_ms: DEFAULT_REVEAL_STAGGER_MS,
            count_up: CountUpTiming::default(),
            sidebar_breakpoint: DEFAULT_SIDEBAR_BREAKPOINT,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse settings file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Defaults, then `dashboard.toml` in the working directory, then environment.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(DEFAULT_SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => apply_file_overrides(&mut settings, &raw).map_err(|source| {
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    apply_env_overrides(&mut settings, env);
    Ok(settings)
}

fn apply_file_overrides(settings: &mut Settings, raw: &str) -> Result<(), toml::de::Error> {
    let file_cfg = toml::from_str::<HashMap<String, toml::Value>>(raw)?;

    if let Some(v) = file_cfg.get("log_filter").and_then(value_as_string) {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.get("reveal_stagger_ms").and_then(value_as_u64) {
        settings.reveal_stagger_ms = v;
    }
    if let Some(v) = file_cfg.get("count_up_duration_ms").and_then(value_as_u64) {
        settings.count_up.duration_ms = v;
    }
    if let Some(v) = file_cfg.get("count_up_min_step_ms").and_then(value_as_u64) {
        settings.count_up.min_step_ms = v;
    }
    if let Some(v) = file_cfg.get("sidebar_breakpoint").and_then(value_as_f32) {
        settings.sidebar_breakpoint = v;
    }

    Ok(())
}

fn apply_env_overrides(settings: &mut Settings, env: impl Fn(&str) -> Option<String>) {
    if let Some(v) = env("DASHBOARD_LOG") {
        settings.log_filter = v;
    }
    if let Some(v) = env("APP__LOG_FILTER") {
        settings.log_filter = v;
    }

    if let Some(parsed) = env("APP__REVEAL_STAGGER_MS").and_then(|v| v.parse().ok()) {
        settings.reveal_stagger_ms = parsed;
    }
    if let Some(parsed) = env("APP__COUNT_UP_DURATION_MS").and_then(|v| v.parse().ok()) {
        settings.count_up.duration_ms = parsed;
    }
    if let Some(parsed) = env("APP__COUNT_UP_MIN_STEP_MS").and_then(|v| v.parse().ok()) {
        settings.count_up.min_step_ms = parsed;
    }
    if let Some(parsed) = env("APP__SIDEBAR_BREAKPOINT").and_then(|v| v.parse().ok()) {
        settings.sidebar_breakpoint = parsed;
    }
}

fn value_as_string(value: &toml::Value) -> Option<String> {
    value.as_str().map(str::to_string)
}

fn value_as_u64(value: &toml::Value) -> Option<u64> {
    match value {
        toml::Value::Integer(v) => u64::try_from(*v).ok(),
        toml::Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_f32(value: &toml::Value) -> Option<f32> {
    match value {
        toml::Value::Float(v) => Some(*v as f32),
        toml::Value::Integer(v) => Some(*v as f32),
        toml::Value::String(v) => v.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
