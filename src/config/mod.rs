use serde::Deserialize;

static CONFIG: OnceCell<Config> = OnceCell::const_new();

mod config_dir;
pub use config_dir::{find_config_file, read_config};

mod error;
pub use error::{ConfigError, ConfigResult};
use tokio::sync::OnceCell;

#[derive(Debug, Deserialize)]
pub struct Config {
    host: Host,
    app: App,
}

#[derive(Debug, Deserialize)]
pub struct Host {
    bindto: String,
}

#[derive(Debug, Deserialize)]
pub struct App {
    session_secret: String,
    #[serde(default = "default_session_ttl_minutes")]
    session_ttl_minutes: i64,
    #[serde(default = "default_sweep_interval_secs")]
    sweep_interval_secs: u64,
    #[serde(default)]
    docs: bool,
    #[serde(skip, default = "chrono::Duration::zero")]
    session_ttl: chrono::Duration,
}

/// Upper bound for `session_ttl_minutes` (one year).
const MAX_SESSION_TTL_MINUTES: i64 = 365 * 24 * 60;
/// Upper bound for `sweep_interval_secs` (one day).
const MAX_SWEEP_INTERVAL_SECS: u64 = 24 * 60 * 60;

fn default_session_ttl_minutes() -> i64 {
    120
}

fn default_sweep_interval_secs() -> u64 {
    60
}

impl Config {
    #[tracing::instrument]
    pub async fn get_or_init(use_local: bool) -> &'static Config {
        CONFIG
            .get_or_init(|| async {
                let config = match Self::load(use_local) {
                    Ok(c) => c,
                    Err(e) => {
                        if !matches!(e, error::ConfigError::ConfigNotFound) {
                            crate::error::log_error(&e);
                        }
                        tracing::error!("Config could not be loaded.");
                        std::process::exit(1);
                    }
                };

                config
            })
            .await
    }

    pub fn load(use_local: bool) -> ConfigResult<Self> {
        let bytes = read_config(use_local)?;
        Self::from_slice(&bytes)
    }

    pub fn from_slice(bytes: &[u8]) -> ConfigResult<Self> {
        let mut config: Self = toml::from_slice(bytes)?;
        config.app.validate()?;
        Ok(config)
    }

    #[inline]
    pub fn host(&self) -> &Host {
        &self.host
    }

    #[inline]
    pub fn app(&self) -> &App {
        &self.app
    }
}

impl Host {
    #[inline]
    pub fn bindto(&self) -> &str {
        &self.bindto
    }
}

impl App {
    fn validate(&mut self) -> ConfigResult<()> {
        if !(1..=MAX_SESSION_TTL_MINUTES).contains(&self.session_ttl_minutes) {
            return Err(ConfigError::InvalidValue {
                field: "session_ttl_minutes",
                reason: "must be between 1 and 525600",
            });
        }
        self.session_ttl = chrono::Duration::try_minutes(self.session_ttl_minutes).ok_or(
            ConfigError::InvalidValue {
                field: "session_ttl_minutes",
                reason: "out of range",
            },
        )?;

        if !(1..=MAX_SWEEP_INTERVAL_SECS).contains(&self.sweep_interval_secs) {
            return Err(ConfigError::InvalidValue {
                field: "sweep_interval_secs",
                reason: "must be between 1 and 86400",
            });
        }
        Ok(())
    }

    #[inline]
    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    #[inline]
    pub fn session_ttl(&self) -> chrono::Duration {
        self.session_ttl
    }

    #[inline]
    pub fn sweep_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.sweep_interval_secs)
    }

    #[inline]
    pub fn docs(&self) -> bool {
        self.docs
    }
}
