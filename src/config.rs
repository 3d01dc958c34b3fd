use serde::Deserialize;
use std::fs;
use std::time::Duration;

pub const CONFIG_FILE: &str = "ltc_search.toml";

/// Upper bounds for the second-valued settings.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 60 * 60;
pub const MAX_STATUS_PANEL_HIDE_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bind_addr: String,
    /// Base URL of the directory backend, e.g. `http://127.0.0.1:5000/api`.
    pub api_base: String,
    pub request_timeout: Duration,
    /// How long the data-status panel stays up.
    pub status_panel_hide_after: Duration,
    pub max_workers: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".into(),
            api_base: "http://127.0.0.1:5000/api".into(),
            request_timeout: Duration::from_secs(30),
            status_panel_hide_after: Duration::from_secs(5),
            max_workers: 8,
        }
    }
}

// Every key is optional; missing keys keep the default.
#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    bind_addr: Option<String>,
    api_base: Option<String>,
    request_timeout_secs: Option<u64>,
    status_panel_hide_secs: Option<u64>,
    max_workers: Option<usize>,
}

/// Defaults, then `ltc_search.toml` if present, then `LTC_*` env vars.
pub fn load_settings() -> Settings {
    let file = fs::read_to_string(CONFIG_FILE).ok();
    settings_from_sources(file.as_deref(), |key| std::env::var(key).ok())
}

pub fn settings_from_sources<F>(file: Option<&str>, env: F) -> Settings
where
    F: Fn(&str) -> Option<String>,
{
    let mut settings = Settings::default();

    if let Some(raw) = file {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => apply_file(&mut settings, file_cfg),
            Err(e) => tracing::warn!(error = %e, "ignoring malformed {CONFIG_FILE}"),
        }
    }

    if let Some(v) = env("LTC_BIND_ADDR") {
        settings.bind_addr = v;
    }
    if let Some(v) = env("LTC_API_BASE") {
        settings.api_base = v;
    }
    if let Some(secs) = parsed_env::<u64, _>(&env, "LTC_REQUEST_TIMEOUT_SECS") {
        settings.request_timeout = capped_secs("request_timeout", secs, MAX_REQUEST_TIMEOUT_SECS);
    }
    if let Some(secs) = parsed_env::<u64, _>(&env, "LTC_STATUS_PANEL_HIDE_SECS") {
        settings.status_panel_hide_after =
            capped_secs("status_panel_hide", secs, MAX_STATUS_PANEL_HIDE_SECS);
    }
    if let Some(n) = parsed_env::<usize, _>(&env, "LTC_MAX_WORKERS") {
        settings.max_workers = n.max(1);
    }

    settings
}

fn apply_file(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.bind_addr {
        settings.bind_addr = v;
    }
    if let Some(v) = file_cfg.api_base {
        settings.api_base = v;
    }
    if let Some(secs) = file_cfg.request_timeout_secs {
        settings.request_timeout = capped_secs("request_timeout", secs, MAX_REQUEST_TIMEOUT_SECS);
    }
    if let Some(secs) = file_cfg.status_panel_hide_secs {
        settings.status_panel_hide_after =
            capped_secs("status_panel_hide", secs, MAX_STATUS_PANEL_HIDE_SECS);
    }
    if let Some(n) = file_cfg.max_workers {
        settings.max_workers = n.max(1);
    }
}

fn capped_secs(setting: &str, secs: u64, max: u64) -> Duration {
    if secs > max {
        tracing::warn!(setting, secs, max, "setting too large, capping");
    }
    Duration::from_secs(secs.min(max))
}

fn parsed_env<T, F>(env: &F, key: &str) -> Option<T>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(key)?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparsable setting");
            None
        }
    }
}
