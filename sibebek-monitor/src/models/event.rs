use sibebek_api::{Channel, ConnectionStatus, Reading};

/// What the ingestor pushes to the dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IngestEvent {
    Reading { channel: Channel, reading: Reading },
    Status(ConnectionStatus),
}

impl IngestEvent {
    pub fn reading(channel: Channel, value: f64) -> Self {
        IngestEvent::Reading { channel, reading: Reading::Value(value) }
    }
}
