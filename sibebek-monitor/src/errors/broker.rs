#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    #[error("Invalid broker url: {0}")]
    InvalidUrl(String),

    #[error("Unsupported broker scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Invalid broker port: {0}")]
    InvalidPort(String),

    #[error("MQTT client error: {0}")]
    Client(#[from] rumqttc::ClientError),
}
