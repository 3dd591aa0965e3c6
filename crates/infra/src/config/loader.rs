//! Configuration loader
//!
//! Builds the application [`Config`] in three layers:
//! 1. Struct defaults
//! 2. A config file, when one is found (`./config.toml` or `./config.json`,
//!    also probed next to the executable)
//! 3. `MAILSIFT_*` environment variables, which override everything
//!
//! ## Environment Variables
//! - `MAILSIFT_HOST`: HTTP bind address
//! - `MAILSIFT_PORT`: HTTP port
//! - `MAILSIFT_MODEL_DIR`: directory for the persisted classifier
//! - `MAILSIFT_TRAINING_DATA`: path to the training CSV
//! - `MAILSIFT_TREES`: number of forest trees
//! - `MAILSIFT_SEED`: training RNG seed
//! - `MAILSIFT_MAX_FEATURES`: TF-IDF vocabulary cap

use std::path::{Path, PathBuf};
use std::str::FromStr;

use mailsift_domain::{Config, MailsiftError, Result};

/// Load configuration with the layered fallback strategy.
///
/// A `.env` file in the working directory is honored before the
/// environment is read.
///
/// # Errors
/// Returns `MailsiftError::Config` when a config file or an environment
/// variable is present but invalid.
pub fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let mut config = match probe_config_paths() {
        Some(path) => load_from_file(&path)?,
        None => {
            tracing::debug!("no config file found, starting from defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a specific file (JSON or TOML by extension).
///
/// # Errors
/// Returns `MailsiftError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    tracing::info!(path = %path.display(), "loading configuration from file");

    let contents = std::fs::read_to_string(path)
        .map_err(|e| MailsiftError::Config(format!("failed to read config file: {}", e)))?;

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
    match extension {
        "toml" => toml::from_str(&contents)
            .map_err(|e| MailsiftError::Config(format!("invalid TOML config: {}", e))),
        "json" => serde_json::from_str(&contents)
            .map_err(|e| MailsiftError::Config(format!("invalid JSON config: {}", e))),
        _ => Err(MailsiftError::Config(format!("unsupported config format: {}", extension))),
    }
}

/// Probe the working directory and the executable directory for a config
/// file, returning the first one that exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd.join("config.toml"));
        candidates.push(cwd.join("config.json"));
    }
    if let Ok(exe) = std::env::current_exe() {
        if let Some(dir) = exe.parent() {
            candidates.push(dir.join("config.toml"));
            candidates.push(dir.join("config.json"));
        }
    }

    candidates.into_iter().find(|p| p.exists())
}

fn apply_env_overrides(config: &mut Config) -> Result<()> {
    if let Ok(host) = std::env::var("MAILSIFT_HOST") {
        config.server.host = host;
    }
    if let Some(port) = env_parse("MAILSIFT_PORT")? {
        config.server.port = port;
    }
    if let Ok(dir) = std::env::var("MAILSIFT_MODEL_DIR") {
        config.model.model_dir = dir;
    }
    if let Ok(path) = std::env::var("MAILSIFT_TRAINING_DATA") {
        config.model.training_data = path;
    }
    if let Some(trees) = env_parse("MAILSIFT_TREES")? {
        config.model.trees = trees;
    }
    if let Some(seed) = env_parse("MAILSIFT_SEED")? {
        config.model.seed = seed;
    }
    if let Some(max_features) = env_parse("MAILSIFT_MAX_FEATURES")? {
        config.model.max_features = max_features;
    }
    Ok(())
}

/// Parse an optional numeric environment variable.
fn env_parse<T: FromStr>(key: &str) -> Result<Option<T>>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| MailsiftError::Config(format!("invalid {}: {}", key, e))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;
    use tempfile::NamedTempFile;

    use super::*;

    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in [
            "MAILSIFT_HOST",
            "MAILSIFT_PORT",
            "MAILSIFT_MODEL_DIR",
            "MAILSIFT_TRAINING_DATA",
            "MAILSIFT_TREES",
            "MAILSIFT_SEED",
            "MAILSIFT_MAX_FEATURES",
        ] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn env_overrides_defaults() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MAILSIFT_HOST", "127.0.0.1");
        std::env::set_var("MAILSIFT_PORT", "9001");
        std::env::set_var("MAILSIFT_TREES", "50");

        let mut config = Config::default();
        apply_env_overrides(&mut config).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9001);
        assert_eq!(config.model.trees, 50);
        // untouched values keep their defaults
        assert_eq!(config.model.seed, 42);

        clear_env();
    }

    #[test]
    fn invalid_numeric_env_is_a_config_error() {
        let _guard = ENV_LOCK.lock().expect("env mutex poisoned");
        clear_env();

        std::env::set_var("MAILSIFT_PORT", "not-a-port");
        let err = apply_env_overrides(&mut Config::default()).unwrap_err();
        assert!(matches!(err, MailsiftError::Config(_)));

        clear_env();
    }

    #[test]
    fn loads_toml_config_file() {
        let toml_content = r#"
[server]
host = "0.0.0.0"
port = 8080

[model]
model_dir = "/var/lib/mailsift"
training_data = "emails.csv"
trees = 100
seed = 7
max_features = 2000
"#;
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(toml_content.as_bytes()).unwrap();
        let path = temp.path().with_extension("toml");
        std::fs::copy(temp.path(), &path).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.model.model_dir, "/var/lib/mailsift");
        assert_eq!(config.model.seed, 7);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn loads_json_config_file() {
        let json_content = r#"{
            "server": { "host": "127.0.0.1", "port": 8000 },
            "model": {
                "model_dir": ".",
                "training_data": "emails.csv",
                "trees": 200,
                "seed": 42,
                "max_features": 5000
            }
        }"#;
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(json_content.as_bytes()).unwrap();
        let path = temp.path().with_extension("json");
        std::fs::copy(temp.path(), &path).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn partial_toml_falls_back_to_section_defaults() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"[server]\nhost = \"10.0.0.1\"\nport = 80\n").unwrap();
        let path = temp.path().with_extension("toml");
        std::fs::copy(temp.path(), &path).unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(config.server.host, "10.0.0.1");
        assert_eq!(config.model.trees, 200);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn invalid_file_is_a_config_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"{ not valid").unwrap();
        let path = temp.path().with_extension("json");
        std::fs::copy(temp.path(), &path).unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, MailsiftError::Config(_)));

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn unsupported_extension_is_a_config_error() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"server: {}\n").unwrap();
        let path = temp.path().with_extension("yaml");
        std::fs::copy(temp.path(), &path).unwrap();

        let err = load_from_file(&path).unwrap_err();
        assert!(matches!(err, MailsiftError::Config(_)));

        std::fs::remove_file(path).ok();
    }
}
