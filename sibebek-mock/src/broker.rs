use std::error::Error;
use std::thread;

use rumqttd::local::{LinkRx, LinkTx};
use rumqttd::{Broker, Config};

use crate::settings::Mock;

/// Embedded broker with a plain TCP listener for sensors and a WebSocket
/// listener for dashboards.
pub struct MockBroker {
    broker: Broker,
}

impl MockBroker {
    pub fn new(mock: &Mock) -> Result<Self, Box<dyn Error>> {
        let config: Config = toml::from_str(&Self::config_source(mock))?;

        Ok(Self {
            broker: Broker::new(config),
        })
    }

    fn config_source(mock: &Mock) -> String {
        let connections = r#"
            connection_timeout_ms = 60000
            max_payload_size = 20480
            max_inflight_count = 100
            dynamic_filters = true
        "#;

        format!(
            r#"
            id = 0

            [router]
            max_connections = 10010
            max_outgoing_packet_count = 200
            max_segment_size = 104857600
            max_segment_count = 10

            [v4.1]
            name = "v4-1"
            listen = "{host}:{tcp_port}"
            next_connection_delay_ms = 1

            [v4.1.connections]
            {connections}

            [ws.1]
            name = "ws-1"
            listen = "{host}:{ws_port}"
            next_connection_delay_ms = 1

            [ws.1.connections]
            {connections}
            "#,
            host = mock.host,
            tcp_port = mock.tcp_port,
            ws_port = mock.ws_port,
        )
    }

    /// Local link into the router. Links have to be taken before `start`.
    pub fn link(&self, client_id: &str) -> Result<(LinkTx, LinkRx), Box<dyn Error>> {
        Ok(self.broker.link(client_id)?)
    }

    pub fn start(mut self) -> thread::JoinHandle<()> {
        thread::spawn(move || {
            if let Err(e) = self.broker.start() {
                tracing::error!("broker stopped: {}", e);
            }
        })
    }
}
