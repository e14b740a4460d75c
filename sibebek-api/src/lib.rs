pub mod models;
pub mod payload;

pub use models::{Channel, ConnectionStatus, Reading};
pub use payload::parse_reading;
