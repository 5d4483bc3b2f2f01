//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Starts from built-in defaults
//! 2. If a config file is found, its values replace the defaults
//! 3. Environment variables override both
//!
//! Every value is optional; a missing file and an empty environment still
//! yield a usable configuration (mock mode on `127.0.0.1:8080`).
//!
//! ## Environment Variables
//! - `ATELIER_SUPABASE_URL`: Hosted backend endpoint URL
//! - `ATELIER_SUPABASE_KEY`: Hosted backend access key
//! - `ATELIER_BUCKET`: Object storage bucket for portfolio assets
//! - `ATELIER_DATA_DIR`: Mock store data directory
//! - `ATELIER_BIND_ADDR`: HTTP listen address
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./atelier.json` or `./atelier.toml` (current working directory)
//! 3. Relative to executable location

use std::path::{Path, PathBuf};

use atelier_domain::{AppConfig, AtelierError, Result};

/// Load configuration with the defaults → file → environment strategy
///
/// # Errors
/// Returns `AtelierError::Config` if a config file was found but could not
/// be parsed. A missing file is not an error.
pub fn load() -> Result<AppConfig> {
    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(Some(path))?,
        None => {
            tracing::debug!("no config file found, starting from defaults");
            AppConfig::default()
        }
    };
    apply_env_overrides(&mut config);
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `AtelierError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<AppConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(AtelierError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            AtelierError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| AtelierError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<AppConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| AtelierError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| AtelierError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(AtelierError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the standard locations for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    // Try current working directory
    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(vec![
            cwd.join("config.json"),
            cwd.join("config.toml"),
            cwd.join("atelier.json"),
            cwd.join("atelier.toml"),
        ]);
    }

    // Try relative to executable
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(vec![
                exe_dir.join("config.json"),
                exe_dir.join("config.toml"),
                exe_dir.join("atelier.json"),
                exe_dir.join("atelier.toml"),
            ]);
        }
    }

    // Return first existing candidate
    candidates.into_iter().find(|path| path.exists())
}

/// Overlay environment variables onto a loaded configuration
///
/// URL and key are applied even when set to an empty string; the mode
/// predicate treats blank values as absent, so an explicitly emptied
/// variable still selects mock mode.
fn apply_env_overrides(config: &mut AppConfig) {
    if let Some(url) = env_override("ATELIER_SUPABASE_URL") {
        config.remote.url = Some(url);
    }
    if let Some(key) = env_override("ATELIER_SUPABASE_KEY") {
        config.remote.key = Some(key);
    }
    if let Some(bucket) = env_override("ATELIER_BUCKET") {
        if !bucket.is_empty() {
            config.remote.bucket = bucket;
        }
    }
    if let Some(data_dir) = env_override("ATELIER_DATA_DIR") {
        if !data_dir.is_empty() {
            config.local.data_dir = data_dir;
        }
    }
    if let Some(bind_addr) = env_override("ATELIER_BIND_ADDR") {
        if !bind_addr.is_empty() {
            config.server.bind_addr = bind_addr;
        }
    }
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
