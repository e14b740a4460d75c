use std::fmt;

use serde::{Deserialize, Serialize};

use sibebek_api::Channel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    /// Temperature in `[0, 17)`
    HeatForLowTemperature,
    /// Temperature above 22
    CoolForHighTemperature,
    /// Humidity in `[0, 60)`
    CoolForLowHumidity,
    /// Humidity above 80
    HeatForHighHumidity,
    /// Ammonia above 24 ppm
    CleanForHighAmmonia,
    /// Nothing else fired
    AllOptimal,
}

impl Recommendation {
    /// The full catalog, in evaluation order.
    pub const CATALOG: [Recommendation; 6] = [
        Recommendation::HeatForLowTemperature,
        Recommendation::CoolForHighTemperature,
        Recommendation::CoolForLowHumidity,
        Recommendation::HeatForHighHumidity,
        Recommendation::CleanForHighAmmonia,
        Recommendation::AllOptimal,
    ];

    pub fn message(&self) -> &'static str {
        match self {
            Recommendation::HeatForLowTemperature => "Turn on the room heater (temperature is too low).",
            Recommendation::CoolForHighTemperature => {
                "Turn on the fan or give cold water to the ducks (temperature is too high)."
            }
            Recommendation::CoolForLowHumidity => {
                "Turn on the fan or give cold water to the ducks (humidity is too low)."
            }
            Recommendation::HeatForHighHumidity => "Turn on the room heater (humidity is too high).",
            Recommendation::CleanForHighAmmonia => {
                "Immediately clean the duck feces (ammonia gas level is too high)."
            }
            Recommendation::AllOptimal => "All conditions are optimal. No action needed.",
        }
    }

    /// Channel whose reading triggered this recommendation.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            Recommendation::HeatForLowTemperature | Recommendation::CoolForHighTemperature => {
                Some(Channel::Temperature)
            }
            Recommendation::CoolForLowHumidity | Recommendation::HeatForHighHumidity => Some(Channel::Humidity),
            Recommendation::CleanForHighAmmonia => Some(Channel::Ammonia),
            Recommendation::AllOptimal => None,
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
