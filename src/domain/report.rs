use chrono::NaiveDate;
use rand::Rng;

use crate::domain::{
    location::Location,
    metrics::{
        ComfortResult, ProbabilityEntry, compute_adverse_probabilities, compute_comfort_level,
    },
    observation::WeatherObservation,
    recommendations::{Recommendation, recommend},
    trends::HistoricalTrends,
};

/// Day-count percentages computed by the analysis service itself.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HistoricalOdds {
    pub hot_day: Option<f64>,
    pub cold_day: Option<f64>,
    pub windy_day: Option<f64>,
    pub rainy_day: Option<f64>,
    pub based_on_years: Option<u32>,
}

/// Everything the analysis service told us about one place and day.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisData {
    pub observation: WeatherObservation,
    pub odds: HistoricalOdds,
    pub trends: HistoricalTrends,
    pub satellite_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub location: Location,
    pub date: NaiveDate,
    pub observation: WeatherObservation,
    pub probabilities: [ProbabilityEntry; 4],
    pub comfort: ComfortResult,
    pub recommendations: Vec<&'static Recommendation>,
    pub odds: HistoricalOdds,
    pub trends: HistoricalTrends,
    pub satellite_url: Option<String>,
}

impl AnalysisReport {
    pub fn build<R: Rng + ?Sized>(
        location: Location,
        date: NaiveDate,
        data: AnalysisData,
        recommendation_count: usize,
        rng: &mut R,
    ) -> Self {
        let observation = data.observation;
        let probabilities = compute_adverse_probabilities(&observation);
        let comfort = compute_comfort_level(&observation, &probabilities);
        let recommendations = recommend(&observation, &probabilities, recommendation_count, rng);

        Self {
            location,
            date,
            observation,
            probabilities,
            comfort,
            recommendations,
            odds: data.odds,
            trends: data.trends,
            satellite_url: data.satellite_url,
        }
    }

    /// Draws a fresh random selection of recommendations.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        self.recommendations = recommend(&self.observation, &self.probabilities, count, rng);
    }
}
