use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use sibebek_api::Channel;

const TEMPERATURE_RANGE: (f64, f64) = (14.0, 28.0);
const HUMIDITY_RANGE: (f64, f64) = (50.0, 90.0);
const AMMONIA_RANGE: (f64, f64) = (8.0, 32.0);

// Litter is cleaned twice a day
const CLEANINGS_PER_DAY: f64 = 2.0;

/// Warmest at midday, coldest at midnight.
pub fn simulated_temperature(day_fraction: f64) -> f64 {
    let (low, high) = TEMPERATURE_RANGE;
    let mid = (low + high) / 2.0;
    let amplitude = (high - low) / 2.0;

    mid + amplitude * (2.0 * PI * (day_fraction - 0.25)).sin()
}

/// Moves against temperature: damp nights, dry afternoons.
pub fn simulated_humidity(day_fraction: f64) -> f64 {
    let (low, high) = HUMIDITY_RANGE;
    let mid = (low + high) / 2.0;
    let amplitude = (high - low) / 2.0;

    mid - amplitude * (2.0 * PI * (day_fraction - 0.25)).sin()
}

/// Builds up linearly until the next cleaning.
pub fn simulated_ammonia(day_fraction: f64) -> f64 {
    let (low, high) = AMMONIA_RANGE;
    let since_cleaning = (day_fraction * CLEANINGS_PER_DAY).rem_euclid(1.0);

    low + (high - low) * since_cleaning
}

pub fn simulated(channel: Channel, day_fraction: f64) -> f64 {
    match channel {
        Channel::Temperature => simulated_temperature(day_fraction),
        Channel::Humidity => simulated_humidity(day_fraction),
        Channel::Ammonia => simulated_ammonia(day_fraction),
    }
}

fn range(channel: Channel) -> (f64, f64) {
    match channel {
        Channel::Temperature => TEMPERATURE_RANGE,
        Channel::Humidity => HUMIDITY_RANGE,
        Channel::Ammonia => AMMONIA_RANGE,
    }
}

/// Curve value plus gaussian sensor noise, kept inside the channel band.
pub fn noisy<R: Rng + ?Sized>(channel: Channel, day_fraction: f64, rng: &mut R) -> f64 {
    let (low, high) = range(channel);
    let sigma = (high - low) * 0.01;
    let noise = Normal::new(0.0, sigma).map(|normal| normal.sample(rng)).unwrap_or(0.0);

    (simulated(channel, day_fraction) + noise).clamp(low, high)
}
