use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub holidays: HolidayApiConfig,

    pub database: DatabaseConfig,

    pub observability: ObservabilityConfig,

    pub security: SecurityConfig,

    /// Where this configuration was read from. Logged once tracing is up.
    #[serde(skip)]
    pub sources: ConfigSources,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    pub env_file: Option<PathBuf>,

    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub log_level: String,

    /// "pretty" (default) or "json"
    pub log_format: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: "pretty".to_string(),
            worker_threads: 2,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            cors_allowed_origins: vec![
                "http://localhost:5000".to_string(),
                "http://127.0.0.1:5000".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayApiConfig {
    pub base_url: String,

    /// ISO 3166-1 alpha-2 code passed to the holiday API.
    pub country_code: String,

    pub year: i32,
}

impl Default for HolidayApiConfig {
    fn default() -> Self {
        Self {
            base_url: crate::clients::nager::NAGER_API.to_string(),
            country_code: "US".to_string(),
            year: 2025,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub host: String,

    pub user: String,

    pub password: String,

    pub name: String,

    /// Full connection URL. Takes precedence over the individual parts.
    pub url: Option<String>,

    /// Fail calculations when the store is unreachable instead of skipping the write.
    pub strict_writes: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            user: "root".to_string(),
            password: String::new(),
            name: "holidays".to_string(),
            url: None,
            strict_writes: false,
        }
    }
}

impl DatabaseConfig {
    #[must_use]
    pub fn connection_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }

        let credentials = if self.password.is_empty() {
            urlencoding::encode(&self.user).into_owned()
        } else {
            format!(
                "{}:{}",
                urlencoding::encode(&self.user),
                urlencoding::encode(&self.password)
            )
        };

        format!("mysql://{}@{}/{}", credentials, self.host, self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SecurityConfig {
    #[serde(skip_serializing)]
    pub secret_key: Option<String>,
}

impl Config {
    /// Loads `.env`, the first config file found, then environment overrides.
    ///
    /// Runs before the subscriber is installed, so nothing is logged here;
    /// call [`Config::log_sources`] afterwards.
    pub fn load() -> Result<Self> {
        let env_file = dotenvy::dotenv().ok();

        let mut config = Self::load_file()?;
        config.sources.env_file = env_file;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn load_file() -> Result<Self> {
        for path in &Self::config_paths() {
            if path.exists() {
                return Self::load_from_path(path);
            }
        }

        Ok(Self::default())
    }

    pub fn log_sources(&self) {
        if let Some(path) = &self.sources.env_file {
            info!("Loaded environment from: {}", path.display());
        }
        match &self.sources.config_file {
            Some(path) => info!("Loaded config from: {}", path.display()),
            None => info!("No config file found, using defaults"),
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.sources.config_file = Some(path.to_path_buf());

        Ok(config)
    }

    /// Overrides file values with the process environment.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("DB_HOST") {
            self.database.host = host;
        }
        if let Some(user) = lookup("DB_USER") {
            self.database.user = user;
        }
        if let Some(password) = lookup("DB_PASSWORD") {
            self.database.password = password;
        }
        if let Some(name) = lookup("DB_NAME") {
            self.database.name = name;
        }
        if let Some(url) = lookup("DATABASE_URL") {
            self.database.url = Some(url);
        }
        if let Some(secret) = lookup("SECRET_KEY") {
            self.security.secret_key = Some(secret);
        }
        if let Some(port) = lookup("HOLIDAYD_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("holidayd").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".holidayd").join("config.toml"));
        }

        paths
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = PathBuf::from("config.toml");
        if path.exists() {
            Ok(false)
        } else {
            Self::default().save_to_path(&path)?;
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.holidays.base_url.is_empty() {
            anyhow::bail!("Holiday API base URL cannot be empty");
        }

        let code = &self.holidays.country_code;
        if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
            anyhow::bail!("Country code must be two ASCII letters, got '{code}'");
        }

        if !(1..=9999).contains(&self.holidays.year) {
            anyhow::bail!("Holiday year out of range: {}", self.holidays.year);
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be > 0");
        }

        Ok(())
    }
}
