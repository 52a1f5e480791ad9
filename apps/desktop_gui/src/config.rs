//! Startup configuration: defaults, then `portfolio.toml`, then environment,
//! then command-line flags.

use std::{
    fs,
    path::{Path, PathBuf},
};

use clap::Parser;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_PAGE_URL: &str = "http://127.0.0.1:3000/";
pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Parser, Debug, Default)]
#[command(name = "portfolio", about = "Personal resume and portfolio viewer")]
pub struct Args {
    /// URL copied by "Copiar enlace del CV".
    #[arg(long)]
    pub page_url: Option<String>,
    /// Directory holding the preference file.
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    pub page_url: String,
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            page_url: DEFAULT_PAGE_URL.to_string(),
            data_dir: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct FileSettings {
    page_url: Option<String>,
    data_dir: Option<PathBuf>,
    log: Option<String>,
}

/// Resolves the startup config. Problems are returned as warnings because
/// logging is not initialized yet.
pub fn load_settings(args: &Args) -> (StartupConfig, Vec<String>) {
    load_settings_with(args, |name| std::env::var(name).ok())
}

pub fn load_settings_with(
    args: &Args,
    env: impl Fn(&str) -> Option<String>,
) -> (StartupConfig, Vec<String>) {
    let mut settings = StartupConfig::default();
    let mut warnings = Vec::new();

    apply_file(&mut settings, &args.config, &mut warnings);

    if let Some(v) = env("PORTFOLIO_PAGE_URL") {
        settings.page_url = v;
    }
    if let Some(v) = env("APP__PAGE_URL") {
        settings.page_url = v;
    }

    if let Some(v) = env("PORTFOLIO_DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__DATA_DIR") {
        settings.data_dir = Some(PathBuf::from(v));
    }

    if let Some(v) = env("RUST_LOG") {
        settings.log_filter = v;
    }

    if let Some(v) = &args.page_url {
        settings.page_url = v.clone();
    }
    if let Some(v) = &args.data_dir {
        settings.data_dir = Some(v.clone());
    }

    settings.page_url = match normalize_page_url(&settings.page_url) {
        Ok(url) => url,
        Err(reason) => {
            warnings.push(format!(
                "ignoring page_url '{}': {reason}; using {DEFAULT_PAGE_URL}",
                settings.page_url
            ));
            DEFAULT_PAGE_URL.to_string()
        }
    };

    (settings, warnings)
}

fn apply_file(settings: &mut StartupConfig, path: &Path, warnings: &mut Vec<String>) {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return,
        Err(err) => {
            warnings.push(format!("failed to read '{}': {err}", path.display()));
            return;
        }
    };

    match toml::from_str::<FileSettings>(&raw) {
        Ok(file_cfg) => {
            if let Some(v) = file_cfg.page_url {
                settings.page_url = v;
            }
            if let Some(v) = file_cfg.data_dir {
                settings.data_dir = Some(v);
            }
            if let Some(v) = file_cfg.log {
                settings.log_filter = v;
            }
        }
        Err(err) => warnings.push(format!("failed to parse '{}': {err}", path.display())),
    }
}

/// The copied link must be an absolute URL.
fn normalize_page_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("empty".to_string());
    }
    let parsed = Url::parse(trimmed).map_err(|err| err.to_string())?;
    if parsed.cannot_be_a_base() {
        return Err("not a hierarchical URL".to_string());
    }
    Ok(parsed.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
