use std::fs;

use serde::Deserialize;
use url::Url;

const SETTINGS_FILE: &str = "docsearch.toml";

#[derive(Debug, Clone)]
pub struct Settings {
    pub server_url: String,
    pub tenant_id: Option<String>,
    pub page_size: u32,
    pub health_interval_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            tenant_id: None,
            page_size: client_core::DEFAULT_PAGE_SIZE,
            health_interval_seconds: 30,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    server_url: Option<String>,
    tenant_id: Option<String>,
    page_size: Option<u32>,
    health_interval_seconds: Option<u64>,
}

/// Defaults, then `docsearch.toml` from the working directory, then
/// `DOCSEARCH__*` environment variables. Unparsable numeric overrides keep
/// the previous value.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        if let Ok(file_cfg) = toml::from_str::<FileSettings>(&raw) {
            if let Some(v) = file_cfg.server_url {
                settings.server_url = v;
            }
            if let Some(v) = file_cfg.tenant_id {
                settings.tenant_id = Some(v);
            }
            if let Some(v) = file_cfg.page_size {
                settings.page_size = v;
            }
            if let Some(v) = file_cfg.health_interval_seconds {
                settings.health_interval_seconds = v;
            }
        }
    }

    if let Ok(v) = std::env::var("DOCSEARCH__SERVER_URL") {
        settings.server_url = v;
    }
    if let Ok(v) = std::env::var("DOCSEARCH__TENANT_ID") {
        settings.tenant_id = Some(v);
    }
    if let Ok(v) = std::env::var("DOCSEARCH__PAGE_SIZE") {
        if let Ok(parsed) = v.parse::<u32>() {
            settings.page_size = parsed;
        }
    }
    if let Ok(v) = std::env::var("DOCSEARCH__HEALTH_INTERVAL_SECONDS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.health_interval_seconds = parsed;
        }
    }

    settings.server_url = normalize_server_url(&settings.server_url);
    settings
}

/// Accepts bare `host:port` input and trims trailing slashes; anything that
/// still does not parse as a URL falls back to the default.
pub fn normalize_server_url(raw: &str) -> String {
    let raw = raw.trim().trim_end_matches('/');
    if raw.is_empty() {
        return Settings::default().server_url;
    }

    let candidate = if raw.contains("://") {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    match Url::parse(&candidate) {
        Ok(_) => candidate,
        Err(_) => Settings::default().server_url,
    }
}
