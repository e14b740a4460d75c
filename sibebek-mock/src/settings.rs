use std::error::Error;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Logger {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broker {
    pub topic_prefix: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mock {
    pub host: String,
    pub tcp_port: u16,
    pub ws_port: u16,
    /// Seconds between published readings
    pub interval_secs: u64,
    /// Ticks per simulated day
    pub day_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub logger: Logger,
    pub broker: Broker,
    pub mock: Mock,
}

impl Settings {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        Self::from_toml(include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/../",
            "configs/default.toml"
        )))
    }

    pub fn from_toml(source: &str) -> Result<Self, Box<dyn Error>> {
        let settings: Settings = toml::from_str(source)?;

        if settings.mock.interval_secs == 0 || settings.mock.day_length == 0 {
            return Err("mock.interval_secs and mock.day_length must be positive".into());
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let settings = Settings::new().unwrap();

        assert_eq!(settings.broker.topic_prefix, "sibebek");
        assert_eq!(settings.mock.tcp_port, 1883);
        assert_eq!(settings.mock.ws_port, 9001);
    }

    #[test]
    fn test_reject_zero_interval() {
        let source = r#"
            [logger]
            level = "debug"

            [broker]
            topic_prefix = "sibebek"

            [mock]
            host = "127.0.0.1"
            tcp_port = 1883
            ws_port = 9001
            interval_secs = 0
            day_length = 180
        "#;

        assert!(Settings::from_toml(source).is_err());
    }
}
