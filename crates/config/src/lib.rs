use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

const DEFAULT_CONFIG_FILES: &[&str] = &[
    "gymcheck.toml",
    "config/gymcheck.toml",
    "crates/config/gymcheck.toml",
    "../gymcheck.toml",
    "../config/gymcheck.toml",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub http: HttpConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    #[serde(default)]
    pub check_ins: CheckInConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub address: String,
    pub port: u16,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1".to_string(),
            port: 3333,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://gymcheck.db".to_string(),
            max_connections: 10,
        }
    }
}

/// Token signing settings.
///
/// ```
/// use gymcheck_config::AuthConfig;
///
/// let auth = AuthConfig::default();
/// assert_eq!(auth.access_token_ttl_seconds, 600);
/// assert_eq!(auth.refresh_token_ttl_seconds, 7 * 24 * 60 * 60);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    #[serde(default = "AuthConfig::default_access_ttl")]
    pub access_token_ttl_seconds: u64,
    #[serde(default = "AuthConfig::default_refresh_ttl")]
    pub refresh_token_ttl_seconds: u64,
}

impl AuthConfig {
    const fn default_access_ttl() -> u64 {
        600
    }

    const fn default_refresh_ttl() -> u64 {
        7 * 24 * 60 * 60
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "change-me-in-production".to_string(),
            access_token_ttl_seconds: Self::default_access_ttl(),
            refresh_token_ttl_seconds: Self::default_refresh_ttl(),
        }
    }
}

/// Geofence and validation window applied to check-ins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckInConfig {
    #[serde(default = "CheckInConfig::default_max_distance")]
    pub max_distance_km: f64,
    #[serde(default = "CheckInConfig::default_validation_window")]
    pub validation_window_minutes: i64,
}

impl CheckInConfig {
    const fn default_max_distance() -> f64 {
        0.1
    }

    const fn default_validation_window() -> i64 {
        20
    }
}

impl Default for CheckInConfig {
    fn default() -> Self {
        Self {
            max_distance_km: Self::default_max_distance(),
            validation_window_minutes: Self::default_validation_window(),
        }
    }
}

/// Load the application configuration by combining defaults, files, and environment overrides.
///
/// ```
/// use gymcheck_config::load;
///
/// std::env::remove_var("GYMCHECK_CONFIG");
///
/// let config = load().expect("configuration should load with defaults");
/// assert!(!config.http.address.is_empty());
/// ```
pub fn load() -> anyhow::Result<AppConfig> {
    let defaults = AppConfig::default();

    let access_ttl = i64::try_from(defaults.auth.access_token_ttl_seconds)?;
    let refresh_ttl = i64::try_from(defaults.auth.refresh_token_ttl_seconds)?;

    let mut builder = config::Config::builder()
        .set_default("http.address", defaults.http.address.clone())?
        .set_default("http.port", i64::from(defaults.http.port))?
        .set_default("database.url", defaults.database.url.clone())?
        .set_default(
            "database.max_connections",
            i64::from(defaults.database.max_connections),
        )?
        .set_default("auth.jwt_secret", defaults.auth.jwt_secret.clone())?
        .set_default("auth.access_token_ttl_seconds", access_ttl)?
        .set_default("auth.refresh_token_ttl_seconds", refresh_ttl)?
        .set_default("check_ins.max_distance_km", defaults.check_ins.max_distance_km)?
        .set_default(
            "check_ins.validation_window_minutes",
            defaults.check_ins.validation_window_minutes,
        )?;

    let environment_overrides = config::Environment::with_prefix("GYMCHECK").separator("__");

    let mut config_file_attached = false;

    if let Ok(path) = std::env::var("GYMCHECK_CONFIG") {
        builder = builder.add_source(config::File::from(PathBuf::from(&path)));
        config_file_attached = true;
        debug!(path, "loading configuration via GYMCHECK_CONFIG");
    } else if let Ok(cwd) = std::env::current_dir() {
        let fallback = DEFAULT_CONFIG_FILES
            .iter()
            .map(|candidate| cwd.join(candidate))
            .find(|path| path.exists());

        if let Some(path) = fallback {
            debug!(path = %path.display(), "loading configuration file");
            builder = builder.add_source(config::File::from(path));
            config_file_attached = true;
        }
    }

    if !config_file_attached {
        debug!("no configuration file found, relying on defaults and environment overrides");
    }

    builder = builder.add_source(environment_overrides);

    let cfg = builder.build().context("unable to build configuration")?;

    let config = cfg
        .try_deserialize::<AppConfig>()
        .context("invalid configuration")?;

    debug!(
        http = ?config.http,
        database = ?config.database,
        check_ins = ?config.check_ins,
        "loaded backend configuration"
    );
    Ok(config)
}
