//! Display-unit conversion. Everything the provider hands us is metric
//! (Celsius, meters/second); conversion happens only at display time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitPreference {
    #[default]
    Metric,
    Imperial,
}

impl UnitPreference {
    pub fn toggled(self) -> Self {
        match self {
            UnitPreference::Metric => UnitPreference::Imperial,
            UnitPreference::Imperial => UnitPreference::Metric,
        }
    }

    pub fn temp_label(self) -> &'static str {
        match self {
            UnitPreference::Metric => "°C",
            UnitPreference::Imperial => "°F",
        }
    }

    pub fn speed_label(self) -> &'static str {
        match self {
            UnitPreference::Metric => "km/h",
            UnitPreference::Imperial => "mph",
        }
    }
}

pub fn to_display_temp(celsius: f64, pref: UnitPreference) -> f64 {
    match pref {
        UnitPreference::Metric => celsius,
        UnitPreference::Imperial => celsius * 9.0 / 5.0 + 32.0,
    }
}

/// Converts m/s to km/h or mph, rounded to one decimal.
pub fn to_display_speed(meters_per_second: f64, pref: UnitPreference) -> f64 {
    let speed = match pref {
        UnitPreference::Metric => meters_per_second * 3.6,
        UnitPreference::Imperial => meters_per_second * 2.237,
    };
    (speed * 10.0).round() / 10.0
}

/// Nearest integer, halves rounded up (-2.5 becomes -2).
pub fn round_for_display(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temperature_conversion() {
        assert_eq!(to_display_temp(0.0, UnitPreference::Metric), 0.0);
        assert_eq!(to_display_temp(0.0, UnitPreference::Imperial), 32.0);
        assert_eq!(to_display_temp(100.0, UnitPreference::Imperial), 212.0);
        assert_eq!(to_display_temp(-40.0, UnitPreference::Imperial), -40.0);
        assert_eq!(to_display_temp(21.5, UnitPreference::Metric), 21.5);
    }

    #[test]
    fn speed_conversion_rounds_to_one_decimal() {
        assert_eq!(to_display_speed(10.0, UnitPreference::Metric), 36.0);
        assert_eq!(to_display_speed(10.0, UnitPreference::Imperial), 22.4);
        assert_eq!(to_display_speed(0.0, UnitPreference::Imperial), 0.0);
        assert_eq!(to_display_speed(4.12, UnitPreference::Metric), 14.8);
    }

    #[test]
    fn toggle_flips_preference() {
        assert_eq!(UnitPreference::Metric.toggled(), UnitPreference::Imperial);
        assert_eq!(UnitPreference::Imperial.toggled(), UnitPreference::Metric);
    }

    #[test]
    fn labels_follow_preference() {
        assert_eq!(UnitPreference::Metric.temp_label(), "°C");
        assert_eq!(UnitPreference::Imperial.temp_label(), "°F");
        assert_eq!(UnitPreference::Metric.speed_label(), "km/h");
        assert_eq!(UnitPreference::Imperial.speed_label(), "mph");
    }

    #[test]
    fn display_rounding_rounds_halves_up() {
        assert_eq!(round_for_display(14.5), 15);
        assert_eq!(round_for_display(14.4), 14);
        assert_eq!(round_for_display(-2.5), -2);
        assert_eq!(round_for_display(-2.6), -3);
    }
}
