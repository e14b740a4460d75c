use std::fmt;

use rumqttc::{MqttOptions, Transport};

use crate::configs::settings::Broker;
use crate::errors::BrokerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// MQTT over WebSocket
    Ws,
    /// MQTT over secure WebSocket
    Wss,
    /// MQTT over plain TCP
    Tcp,
    /// MQTT over TLS
    Tls,
}

impl Scheme {
    fn parse(scheme: &str) -> Result<Self, BrokerError> {
        match scheme.to_ascii_lowercase().as_str() {
            "ws" => Ok(Scheme::Ws),
            "wss" => Ok(Scheme::Wss),
            "mqtt" | "tcp" => Ok(Scheme::Tcp),
            "mqtts" | "ssl" | "tls" => Ok(Scheme::Tls),
            _ => Err(BrokerError::UnsupportedScheme(scheme.to_string())),
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Scheme::Ws => 80,
            Scheme::Wss => 443,
            Scheme::Tcp => 1883,
            Scheme::Tls => 8883,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Ws => "ws",
            Scheme::Wss => "wss",
            Scheme::Tcp => "mqtt",
            Scheme::Tls => "mqtts",
        }
    }

    pub fn is_websocket(&self) -> bool {
        matches!(self, Scheme::Ws | Scheme::Wss)
    }
}

/// Broker address split out of a `scheme://host[:port][/path]` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    pub scheme: Scheme,
    pub host: String,
    pub port: u16,
    pub path: String,
}

impl BrokerEndpoint {
    pub fn parse(url: &str) -> Result<Self, BrokerError> {
        let url = url.trim();
        let (scheme, rest) = url
            .split_once("://")
            .ok_or_else(|| BrokerError::InvalidUrl(url.to_string()))?;
        let scheme = Scheme::parse(scheme)?;

        let (authority, path) = match rest.find('/') {
            Some(index) => rest.split_at(index),
            None => (rest, ""),
        };

        let (host, port) = Self::split_authority(authority)
            .ok_or_else(|| BrokerError::InvalidUrl(url.to_string()))?;

        if host.is_empty() {
            return Err(BrokerError::InvalidUrl(url.to_string()));
        }

        let port = match port {
            Some(port) => port
                .parse::<u16>()
                .map_err(|_| BrokerError::InvalidPort(port.to_string()))?,
            None => scheme.default_port(),
        };

        Ok(Self {
            scheme,
            host: host.to_string(),
            port,
            path: path.to_string(),
        })
    }

    // `[::1]:9001` keeps its brackets in the host part
    fn split_authority(authority: &str) -> Option<(&str, Option<&str>)> {
        if authority.starts_with('[') {
            let close = authority.find(']')?;
            let (host, rest) = authority.split_at(close + 1);
            return match rest {
                "" => Some((host, None)),
                _ => Some((host, Some(rest.strip_prefix(':')?))),
            };
        }

        match authority.rsplit_once(':') {
            Some((host, port)) => Some((host, Some(port))),
            None => Some((authority, None)),
        }
    }

    /// Connection options for this endpoint. WebSocket transports take the
    /// full URL as the host.
    pub fn mqtt_options(&self, client_id: &str, broker: &Broker) -> MqttOptions {
        let host = if self.scheme.is_websocket() {
            self.to_string()
        } else {
            self.host.clone()
        };

        let mut options = MqttOptions::new(client_id, host, self.port);
        options.set_keep_alive(broker.keep_alive());
        options.set_clean_session(true);

        match self.scheme {
            Scheme::Ws => {
                options.set_transport(Transport::Ws);
            }
            Scheme::Wss => {
                options.set_transport(Transport::wss_with_default_config());
            }
            Scheme::Tls => {
                options.set_transport(Transport::tls_with_default_config());
            }
            Scheme::Tcp => {}
        }

        options
    }
}

impl fmt::Display for BrokerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}:{}{}", self.scheme.as_str(), self.host, self.port, self.path)
    }
}
