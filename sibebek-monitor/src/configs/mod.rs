mod endpoint;
mod settings;

pub use endpoint::{BrokerEndpoint, Scheme};
pub use settings::{Broker, Dashboard, Logger, OutputFormat, Settings};
