use std::env;
use std::time::Duration;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

// Variables understood by the web dashboard deployment
const LEGACY_BROKER_URL: &str = "MQTT_BROKER_URL";
const LEGACY_RECONNECT_PERIOD: &str = "MQTT_RECONNECT_PERIOD";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broker {
    pub url: String,
    pub client_id_prefix: String,
    pub topic_prefix: String,
    /// Delay before reconnecting, in milliseconds
    pub reconnect_period: u64,
    /// Keep alive interval, in seconds
    pub keep_alive: u64,
}

impl Broker {
    pub fn reconnect_period(&self) -> Duration {
        Duration::from_millis(self.reconnect_period)
    }

    pub fn keep_alive(&self) -> Duration {
        Duration::from_secs(self.keep_alive)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    pub format: OutputFormat,
    pub clear_screen: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub broker: Broker,
    pub dashboard: Dashboard,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or("development".into());

        let builder = Self::builder("configs", &run_mode)?.add_source(Self::environment());
        let builder = Self::legacy_overrides(builder, |key| env::var(key).ok())?;

        Self::build(builder)
    }

    /// `MQTT_BROKER_URL` and `MQTT_RECONNECT_PERIOD` win over every other
    /// source. A reconnect period without leading digits is ignored.
    pub fn legacy_overrides<F>(
        builder: ConfigBuilder<DefaultState>,
        lookup: F,
    ) -> Result<ConfigBuilder<DefaultState>, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = lookup(LEGACY_BROKER_URL).filter(|url| !url.trim().is_empty());
        let reconnect_period = lookup(LEGACY_RECONNECT_PERIOD).and_then(|v| leading_millis(&v));

        builder
            .set_override_option("broker.url", url)?
            .set_override_option("broker.reconnect_period", reconnect_period)
    }

    /// Defaults layered under `{dir}/default` and `{dir}/{run_mode}`. Both
    /// files are optional.
    pub fn builder(dir: &str, run_mode: &str) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(Config::builder()
            .set_default("logger.level", "info")?
            .set_default("broker.url", "ws://150.109.25.181:9001")?
            .set_default("broker.client_id_prefix", "sibebek-web")?
            .set_default("broker.topic_prefix", sibebek_api::models::DEFAULT_TOPIC_PREFIX)?
            .set_default("broker.reconnect_period", 5000)?
            .set_default("broker.keep_alive", 5)?
            .set_default("dashboard.format", "text")?
            .set_default("dashboard.clear_screen", true)?
            .add_source(File::with_name(&format!("{dir}/default")).required(false))
            .add_source(File::with_name(&format!("{dir}/{run_mode}")).required(false)))
    }

    /// `SIBEBEK_BROKER__URL=...` style overrides.
    pub fn environment() -> Environment {
        Environment::with_prefix("SIBEBEK")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings: Settings = builder.build()?.try_deserialize()?;

        if settings.broker.topic_prefix.is_empty() {
            return Err(ConfigError::Message("broker.topic_prefix must not be empty".into()));
        }

        Ok(settings)
    }
}

// Leading digits after optional whitespace, so "5000ms" reads as 5000.
// Negative values are rejected.
fn leading_millis(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let value = value.strip_prefix('+').unwrap_or(value);
    let end = value.find(|c: char| !c.is_ascii_digit()).unwrap_or(value.len());

    value[..end].parse().ok()
}
