#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

//! Adverse-condition probabilities and the comfort score derived from them.

use crate::{cli::IconMode, domain::observation::WeatherObservation};

const HOT_RANGE: (f64, f64) = (25.0, 40.0);
const COLD_MIN_C: f64 = 18.0;
const COLD_MAX_C: f64 = 5.0;
const WIND_RANGE: (f64, f64) = (15.0, 60.0);
const HUMIDITY_COMFORT_LIMIT: f64 = 75.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdverseCondition {
    Hot,
    Rain,
    Wind,
    Cold,
}

impl AdverseCondition {
    /// Display order of the probability cards.
    pub const ALL: [Self; 4] = [Self::Hot, Self::Rain, Self::Wind, Self::Cold];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Hot => "Very Hot",
            Self::Rain => "Rain",
            Self::Wind => "Strong Wind",
            Self::Cold => "Very Cold",
        }
    }

    #[must_use]
    pub fn kind(self) -> ProbabilityKind {
        match self {
            Self::Hot | Self::Wind => ProbabilityKind::Danger,
            Self::Rain | Self::Cold => ProbabilityKind::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbabilityKind {
    Danger,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbabilityEntry {
    pub condition: AdverseCondition,
    pub value: u8,
    pub kind: ProbabilityKind,
}

impl ProbabilityEntry {
    fn new(condition: AdverseCondition, value: u8) -> Self {
        Self {
            condition,
            value: value.min(100),
            kind: condition.kind(),
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        self.condition.label()
    }
}

/// Value of `condition` in `probabilities`, or 0 when absent.
#[must_use]
pub fn probability_of(probabilities: &[ProbabilityEntry], condition: AdverseCondition) -> u8 {
    probabilities
        .iter()
        .find(|entry| entry.condition == condition)
        .map_or(0, |entry| entry.value)
}

/// Linear min-max scaling onto 0..=100, saturating at both ends.
#[must_use]
pub fn scale(value: f64, min: f64, max: f64) -> u8 {
    if value.is_nan() || value <= min {
        return 0;
    }
    if value >= max {
        return 100;
    }
    (100.0 * (value - min) / (max - min)).round().clamp(0.0, 100.0) as u8
}

/// Four risk scores in the fixed order hot, rain, wind, cold.
#[must_use]
pub fn compute_adverse_probabilities(weather: &WeatherObservation) -> [ProbabilityEntry; 4] {
    let hot = scale(weather.temperature, HOT_RANGE.0, HOT_RANGE.1);
    let rain = rain_percent(weather.rainfall);
    let wind = scale(weather.wind, WIND_RANGE.0, WIND_RANGE.1);
    let cold = scale(
        COLD_MIN_C - weather.temperature,
        0.0,
        COLD_MIN_C - COLD_MAX_C,
    );

    [
        ProbabilityEntry::new(AdverseCondition::Hot, hot),
        ProbabilityEntry::new(AdverseCondition::Rain, rain),
        ProbabilityEntry::new(AdverseCondition::Wind, wind),
        ProbabilityEntry::new(AdverseCondition::Cold, cold),
    ]
}

fn rain_percent(rainfall: f64) -> u8 {
    if rainfall.is_finite() {
        rainfall.clamp(0.0, 100.0).round() as u8
    } else {
        0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComfortLevel {
    VeryComfortable,
    Comfortable,
    Uncomfortable,
    VeryUncomfortable,
}

impl ComfortLevel {
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::VeryComfortable
        } else if score >= 60.0 {
            Self::Comfortable
        } else if score >= 40.0 {
            Self::Uncomfortable
        } else {
            Self::VeryUncomfortable
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryComfortable => "Very Comfortable",
            Self::Comfortable => "Comfortable",
            Self::Uncomfortable => "Uncomfortable",
            Self::VeryUncomfortable => "Very Uncomfortable",
        }
    }

    #[must_use]
    pub fn glyph(self, mode: IconMode) -> &'static str {
        match (self, mode) {
            (Self::VeryComfortable, IconMode::Emoji) => "😄",
            (Self::Comfortable, IconMode::Emoji) => "🙂",
            (Self::Uncomfortable, IconMode::Emoji) => "😕",
            (Self::VeryUncomfortable, IconMode::Emoji) => "😫",
            (Self::VeryComfortable, _) => ":D",
            (Self::Comfortable, _) => ":)",
            (Self::Uncomfortable, _) => ":/",
            (Self::VeryUncomfortable, _) => ":(",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComfortResult {
    pub level: ComfortLevel,
    pub score: f64,
}

#[must_use]
pub fn compute_comfort_level(
    weather: &WeatherObservation,
    probabilities: &[ProbabilityEntry],
) -> ComfortResult {
    let penalty = |condition, weight: f64| f64::from(probability_of(probabilities, condition)) * weight;

    let mut score = 100.0;
    score -= penalty(AdverseCondition::Hot, 1.2);
    score -= penalty(AdverseCondition::Cold, 1.0);
    score -= penalty(AdverseCondition::Rain, 0.6);
    score -= penalty(AdverseCondition::Wind, 0.5);
    if weather.humidity > HUMIDITY_COMFORT_LIMIT {
        score -= (weather.humidity - HUMIDITY_COMFORT_LIMIT) * 0.5;
    }

    ComfortResult {
        level: ComfortLevel::from_score(score),
        score,
    }
}
