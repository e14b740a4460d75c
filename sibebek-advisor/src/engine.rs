use crate::readings::Readings;
use crate::recommendation::Recommendation;

// Comfortable bands are [17, 22] degrees and [60, 80] percent
const TEMPERATURE_LOW: f64 = 17.0;
const TEMPERATURE_HIGH: f64 = 22.0;
const HUMIDITY_LOW: f64 = 60.0;
const HUMIDITY_HIGH: f64 = 80.0;
const AMMONIA_HIGH: f64 = 24.0;

pub fn advise(readings: &Readings) -> Vec<Recommendation> {
    let Readings { temperature, humidity, ammonia } = *readings;
    let mut recommendations = Vec::with_capacity(3);

    if temperature >= 0.0 && temperature < TEMPERATURE_LOW {
        recommendations.push(Recommendation::HeatForLowTemperature);
    }
    if temperature > TEMPERATURE_HIGH {
        recommendations.push(Recommendation::CoolForHighTemperature);
    }

    if humidity >= 0.0 && humidity < HUMIDITY_LOW {
        recommendations.push(Recommendation::CoolForLowHumidity);
    }
    if humidity > HUMIDITY_HIGH {
        recommendations.push(Recommendation::HeatForHighHumidity);
    }

    if ammonia > AMMONIA_HIGH {
        recommendations.push(Recommendation::CleanForHighAmmonia);
    }

    if recommendations.is_empty() {
        recommendations.push(Recommendation::AllOptimal);
    }

    recommendations
}

pub fn messages(readings: &Readings) -> Vec<&'static str> {
    advise(readings).iter().map(Recommendation::message).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::Recommendation::*;

    // Inside every comfortable band
    fn neutral() -> Readings {
        Readings::new(20.0, 70.0, 10.0)
    }

    #[test]
    fn test_optimal_conditions() {
        assert_eq!(advise(&neutral()), vec![AllOptimal]);
        assert_eq!(messages(&neutral()), vec!["All conditions are optimal. No action needed."]);
    }

    #[test]
    fn test_low_temperature() {
        let readings = Readings { temperature: 15.0, ..neutral() };

        assert_eq!(advise(&readings), vec![HeatForLowTemperature]);
    }

    #[test]
    fn test_high_temperature() {
        let readings = Readings { temperature: 25.0, ..neutral() };

        assert_eq!(advise(&readings), vec![CoolForHighTemperature]);
    }

    #[test]
    fn test_humidity_rules() {
        let high = advise(&Readings { humidity: 85.0, ..neutral() });
        let low = advise(&Readings { humidity: 50.0, ..neutral() });

        assert!(high.contains(&HeatForHighHumidity));
        assert!(low.contains(&CoolForLowHumidity));
    }

    #[test]
    fn test_ammonia_threshold_is_exclusive() {
        assert!(advise(&Readings { ammonia: 30.0, ..neutral() }).contains(&CleanForHighAmmonia));
        assert!(!advise(&Readings { ammonia: 24.0, ..neutral() }).contains(&CleanForHighAmmonia));
    }

    #[test]
    fn test_no_low_ammonia_rule() {
        assert_eq!(advise(&Readings { ammonia: 0.0, ..neutral() }), vec![AllOptimal]);
        assert_eq!(advise(&Readings { ammonia: -5.0, ..neutral() }), vec![AllOptimal]);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(advise(&Readings { temperature: 0.0, ..neutral() }), vec![HeatForLowTemperature]);
        assert_eq!(advise(&Readings { temperature: 17.0, ..neutral() }), vec![AllOptimal]);
        assert_eq!(advise(&Readings { temperature: 22.0, ..neutral() }), vec![AllOptimal]);
        assert_eq!(advise(&Readings { humidity: 0.0, ..neutral() }), vec![CoolForLowHumidity]);
        assert_eq!(advise(&Readings { humidity: 60.0, ..neutral() }), vec![AllOptimal]);
        assert_eq!(advise(&Readings { humidity: 80.0, ..neutral() }), vec![AllOptimal]);
    }

    #[test]
    fn test_negative_readings_are_inert() {
        let readings = Readings { temperature: -3.0, humidity: -1.0, ..neutral() };

        assert_eq!(advise(&readings), vec![AllOptimal]);
    }

    #[test]
    fn test_multiple_rules_keep_order() {
        let readings = Readings::new(25.0, 85.0, 30.0);

        assert_eq!(
            advise(&readings),
            vec![CoolForHighTemperature, HeatForHighHumidity, CleanForHighAmmonia]
        );

        let readings = Readings::new(10.0, 40.0, 50.0);

        assert_eq!(
            advise(&readings),
            vec![HeatForLowTemperature, CoolForLowHumidity, CleanForHighAmmonia]
        );
    }

    #[test]
    fn test_nan_channel_fires_nothing() {
        let readings = Readings { temperature: f64::NAN, humidity: 85.0, ..neutral() };
        assert_eq!(advise(&readings), vec![HeatForHighHumidity]);

        let readings = Readings { ammonia: f64::NAN, temperature: 10.0, ..neutral() };
        assert_eq!(advise(&readings), vec![HeatForLowTemperature]);
    }

    #[test]
    fn test_all_nan_is_fallback() {
        assert_eq!(advise(&Readings::inert()), vec![AllOptimal]);
    }

    #[test]
    fn test_infinities() {
        assert_eq!(
            advise(&Readings::new(f64::INFINITY, f64::INFINITY, f64::INFINITY)),
            vec![CoolForHighTemperature, HeatForHighHumidity, CleanForHighAmmonia]
        );
        assert_eq!(
            advise(&Readings::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY)),
            vec![AllOptimal]
        );
    }

    #[test]
    fn test_never_empty() {
        let samples = [
            f64::NAN, f64::NEG_INFINITY, -1.0, 0.0, 16.9, 17.0, 22.0, 22.1, 24.0, 24.1, 59.9, 60.0, 80.0,
            80.1, 1e12, f64::INFINITY,
        ];

        for &temperature in &samples {
            for &humidity in &samples {
                for &ammonia in &samples {
                    let recommendations = advise(&Readings::new(temperature, humidity, ammonia));

                    assert!(!recommendations.is_empty());
                    assert_eq!(
                        recommendations.contains(&AllOptimal),
                        recommendations.len() == 1 && recommendations[0] == AllOptimal
                    );
                }
            }
        }
    }
}
