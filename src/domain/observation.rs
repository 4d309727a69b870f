use serde::{Deserialize, Serialize};

use crate::cli::IconMode;

/// Sky condition used for the headline icon of a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Night,
}

impl Condition {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Rainy => "Rainy",
            Self::Night => "Clear night",
        }
    }

    #[must_use]
    pub fn icon(self, mode: IconMode) -> &'static str {
        let (ascii, emoji, unicode) = match self {
            Self::Sunny => ("SUN", "☀️", "☀"),
            Self::Cloudy => ("CLD", "☁️", "☁"),
            Self::Rainy => ("RAN", "🌧️", "☂"),
            Self::Night => ("MON", "🌙", "☾"),
        };
        match mode {
            IconMode::Ascii => ascii,
            IconMode::Emoji => emoji,
            IconMode::Unicode => unicode,
        }
    }
}

/// Averaged historical weather for one place and calendar day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherObservation {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind: f64,
    pub condition: Condition,
}

impl WeatherObservation {
    /// Builds an observation from raw averages, deriving the sky condition.
    #[must_use]
    pub fn from_averages(temperature: f64, humidity: f64, rainfall: f64, wind: f64) -> Self {
        let temperature = finite_or_zero(temperature);
        let humidity = finite_or_zero(humidity);
        let rainfall = finite_or_zero(rainfall);
        let wind = finite_or_zero(wind);
        Self {
            temperature,
            humidity,
            rainfall,
            wind,
            condition: derive_condition(humidity, rainfall),
        }
    }
}

#[must_use]
pub fn derive_condition(humidity: f64, rainfall: f64) -> Condition {
    if rainfall >= 50.0 {
        Condition::Rainy
    } else if rainfall >= 30.0 || humidity >= 75.0 {
        Condition::Cloudy
    } else {
        Condition::Sunny
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
