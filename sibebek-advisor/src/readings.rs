use serde::{Deserialize, Serialize};

use sibebek_api::{Channel, Reading};

/// One value per channel, as seen by the rule set. No range validation is
/// performed; `NaN` is a legal value and fires nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Readings {
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity percentage
    pub humidity: f64,
    /// Ammonia gas concentration in ppm
    pub ammonia: f64,
}

impl Readings {
    pub fn new(temperature: f64, humidity: f64, ammonia: f64) -> Self {
        Self { temperature, humidity, ammonia }
    }

    /// All channels unknown. Only the fallback fires for this.
    pub fn inert() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN)
    }

    pub fn from_cached(temperature: Reading, humidity: Reading, ammonia: Reading) -> Self {
        Self::new(temperature.or_inert(), humidity.or_inert(), ammonia.or_inert())
    }

    pub fn get(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Temperature => self.temperature,
            Channel::Humidity => self.humidity,
            Channel::Ammonia => self.ammonia,
        }
    }

    pub fn with(mut self, channel: Channel, value: f64) -> Self {
        match channel {
            Channel::Temperature => self.temperature = value,
            Channel::Humidity => self.humidity = value,
            Channel::Ammonia => self.ammonia = value,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cached_maps_pending_to_nan() {
        let readings = Readings::from_cached(Reading::Value(19.0), Reading::Pending, Reading::Value(3.0));

        assert_eq!(readings.temperature, 19.0);
        assert!(readings.humidity.is_nan());
        assert_eq!(readings.ammonia, 3.0);
    }

    #[test]
    fn test_with_overwrites_single_channel() {
        let readings = Readings::new(20.0, 70.0, 10.0).with(Channel::Humidity, 90.0);

        assert_eq!(readings.get(Channel::Temperature), 20.0);
        assert_eq!(readings.get(Channel::Humidity), 90.0);
        assert_eq!(readings.get(Channel::Ammonia), 10.0);
    }
}
