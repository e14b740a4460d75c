use std::fmt;

use serde::{Deserialize, Serialize};

/// Broker connection state as reported by the ingestor. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    #[default]
    Connecting,
    Connected,
    Reconnecting,
    Offline,
    ConnectionError,
}

impl ConnectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Reconnecting => "Reconnecting...",
            ConnectionStatus::Offline => "Offline",
            ConnectionStatus::ConnectionError => "Connection Error",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_connecting() {
        assert_eq!(ConnectionStatus::default(), ConnectionStatus::Connecting);
    }

    #[test]
    fn test_only_connected_is_connected() {
        assert!(ConnectionStatus::Connected.is_connected());
        assert!(!ConnectionStatus::Connecting.is_connected());
        assert!(!ConnectionStatus::Reconnecting.is_connected());
        assert!(!ConnectionStatus::Offline.is_connected());
        assert!(!ConnectionStatus::ConnectionError.is_connected());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConnectionStatus::Reconnecting.to_string(), "Reconnecting...");
        assert_eq!(ConnectionStatus::ConnectionError.to_string(), "Connection Error");
    }
}
