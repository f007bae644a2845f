//! Runtime configuration.
//!
//! Built from the embedded `DEFAULT_CONFIG`. A TOML document stored in
//! localStorage under `pr_dashboard_config` is merged over it key by key,
//! so an override only needs the values it changes.

use once_cell::sync::OnceCell;
use serde::Deserialize;

const OVERRIDE_STORAGE_KEY: &str = "pr_dashboard_config";

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
port = 3000
prefix = "/pr"

[ui]
page_size = 50
page_size_options = [25, 50, 100, 200]
toast_timeout_ms = 4000

[log]
level = "debug"
"#;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub port: u16,
    pub prefix: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct UiConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    pub toast_timeout_ms: u64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
    pub level: String,
}

impl LogConfig {
    pub fn level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Info)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                port: 3000,
                prefix: "/pr".to_string(),
            },
            ui: UiConfig {
                page_size: 50,
                page_size_options: vec![25, 50, 100, 200],
                toast_timeout_ms: 4000,
            },
            log: LogConfig {
                level: "debug".to_string(),
            },
        }
    }
}

/// Parse `DEFAULT_CONFIG` with `override_toml` merged on top.
pub fn parse_config(override_toml: Option<&str>) -> Result<AppConfig, String> {
    let mut base: toml::Table = toml::from_str(DEFAULT_CONFIG).map_err(|e| e.to_string())?;
    if let Some(text) = override_toml {
        let over: toml::Table =
            toml::from_str(text).map_err(|e| format!("invalid config override: {}", e))?;
        merge_tables(&mut base, over);
    }
    let config: AppConfig = toml::Value::Table(base)
        .try_into()
        .map_err(|e: toml::de::Error| e.to_string())?;
    validate(&config)?;
    Ok(config)
}

fn merge_tables(base: &mut toml::Table, over: toml::Table) {
    for (key, value) in over {
        match (base.get_mut(&key), value) {
            (Some(toml::Value::Table(existing)), toml::Value::Table(nested)) => {
                merge_tables(existing, nested)
            }
            (_, value) => {
                base.insert(key, value);
            }
        }
    }
}

fn validate(config: &AppConfig) -> Result<(), String> {
    if config.ui.page_size == 0 {
        return Err("ui.page_size must be positive".to_string());
    }
    if config.ui.page_size_options.iter().any(|&n| n == 0) {
        return Err("ui.page_size_options must be positive".to_string());
    }
    if !config.api.prefix.is_empty() && !config.api.prefix.starts_with('/') {
        return Err("api.prefix must start with '/'".to_string());
    }
    Ok(())
}

fn read_override() -> Option<String> {
    web_sys::window()?
        .local_storage()
        .ok()??
        .get_item(OVERRIDE_STORAGE_KEY)
        .ok()?
}

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

/// Loaded once per page load.
pub fn app_config() -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let override_toml = read_override();
        match parse_config(override_toml.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                // logger may not be up yet, console still works
                web_sys::console::warn_1(&format!("config: {}, using defaults", e).into());
                AppConfig::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log.level(), log::Level::Debug);
    }

    #[test]
    fn test_override_is_merged() {
        let config = parse_config(Some("[api]\nport = 8080\n[log]\nlevel = \"warn\"")).unwrap();
        assert_eq!(config.api.port, 8080);
        assert_eq!(config.api.prefix, "/pr");
        assert_eq!(config.ui.page_size, 50);
        assert_eq!(config.log.level(), log::Level::Warn);
    }

    #[test]
    fn test_invalid_override_is_rejected() {
        assert!(parse_config(Some("[api\nport = 1")).is_err());
        assert!(parse_config(Some("[ui]\npage_size = 0")).is_err());
        assert!(parse_config(Some("[api]\nprefix = \"pr\"")).is_err());
        assert!(parse_config(Some("[api]\nport = \"x\"")).is_err());
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let log = LogConfig { level: "loud".into() };
        assert_eq!(log.level(), log::Level::Info);
    }
}
