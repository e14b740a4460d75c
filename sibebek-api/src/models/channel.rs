use std::fmt;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOPIC_PREFIX: &str = "sibebek";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Air temperature in degrees Celsius
    Temperature,
    /// Relative humidity percentage
    Humidity,
    /// Ammonia gas concentration in ppm
    Ammonia,
}

impl Channel {
    /// Every channel, in the order readings are displayed and evaluated.
    pub const ALL: [Channel; 3] = [Channel::Temperature, Channel::Humidity, Channel::Ammonia];

    pub fn name(&self) -> &'static str {
        match self {
            Channel::Temperature => "temperature",
            Channel::Humidity => "humidity",
            Channel::Ammonia => "ammonia",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Channel::Temperature => "°C",
            Channel::Humidity => "%",
            Channel::Ammonia => "ppm",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Channel::Temperature => "Temperature",
            Channel::Humidity => "Humidity",
            Channel::Ammonia => "Ammonia Gas",
        }
    }

    pub fn topic(&self, prefix: &str) -> String {
        format!("{prefix}/{}", self.name())
    }

    /// Resolve a broker topic back to its channel. Anything other than
    /// `{prefix}/{name}` for one of the three names is not ours.
    pub fn from_topic(prefix: &str, topic: &str) -> Option<Channel> {
        let name = topic.strip_prefix(prefix)?.strip_prefix('/')?;

        Channel::ALL.into_iter().find(|channel| channel.name() == name)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
