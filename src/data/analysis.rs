use std::time::Duration;

use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    data::{Endpoints, http_client, lenient},
    domain::{
        location::Location,
        observation::WeatherObservation,
        report::{AnalysisData, HistoricalOdds},
        trends::HistoricalTrends,
    },
    error::ServiceError,
};

const SERVICE: &str = "analysis";

#[derive(Debug, Clone)]
pub struct AnalysisClient {
    client: Client,
    url: String,
}

impl AnalysisClient {
    #[must_use]
    pub fn new(endpoints: &Endpoints) -> Self {
        Self::with_url(&endpoints.analysis_url)
    }

    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(30)),
            url: url.into(),
        }
    }

    pub async fn analyze(
        &self,
        location: &Location,
        date: NaiveDate,
    ) -> Result<AnalysisData, ServiceError> {
        let body = AnalyzeRequest {
            location: &location.name,
            date: date.format("%Y-%m-%d").to_string(),
            latitude: location.latitude,
            longitude: location.longitude,
        };
        debug!(location = %location.name, %date, url = %self.url, "requesting analysis");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|source| ServiceError::Transport {
                service: SERVICE,
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.error);
            warn!(status = status.as_u16(), ?message, "analysis service rejected request");
            return Err(ServiceError::Status {
                service: SERVICE,
                status: status.as_u16(),
                message,
            });
        }

        let payload: AnalyzeResponse = response.json().await.map_err(|source| {
            ServiceError::Decode {
                service: SERVICE,
                source,
            }
        })?;

        let data = payload.into_data()?;
        info!(
            location = %location.name,
            years = ?data.odds.based_on_years,
            "analysis received"
        );
        Ok(data)
    }
}

#[derive(Debug, Serialize)]
struct AnalyzeRequest<'a> {
    location: &'a str,
    date: String,
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalyzeResponse {
    weather_analysis: WeatherAnalysis,
    nasa_satellite_view_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeatherAnalysis {
    error: Option<String>,
    #[serde(deserialize_with = "lenient::option_f64")]
    average_temperature_celsius: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    average_humidity_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    chance_of_any_rain_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    average_wind_speed_kmh: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    chance_of_hot_day_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    chance_of_cold_day_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    chance_of_windy_day_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    chance_of_rainy_day_percent: Option<f64>,
    #[serde(deserialize_with = "lenient::option_f64")]
    analysis_based_on_years: Option<f64>,
    historical_trends: HistoricalTrends,
}

impl AnalyzeResponse {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn into_data(self) -> Result<AnalysisData, ServiceError> {
        let analysis = self.weather_analysis;
        if let Some(message) = analysis.error {
            return Err(ServiceError::NoHistoricalData(message));
        }

        let observation = WeatherObservation::from_averages(
            analysis.average_temperature_celsius.unwrap_or_default(),
            analysis.average_humidity_percent.unwrap_or_default(),
            analysis.chance_of_any_rain_percent.unwrap_or_default(),
            analysis.average_wind_speed_kmh.unwrap_or_default(),
        );
        let odds = HistoricalOdds {
            hot_day: analysis.chance_of_hot_day_percent,
            cold_day: analysis.chance_of_cold_day_percent,
            windy_day: analysis.chance_of_windy_day_percent,
            rainy_day: analysis.chance_of_rainy_day_percent,
            based_on_years: analysis
                .analysis_based_on_years
                .filter(|years| *years >= 0.0)
                .map(|years| years.round() as u32),
        };

        Ok(AnalysisData {
            observation,
            odds,
            trends: analysis.historical_trends,
            satellite_url: self
                .nasa_satellite_view_url
                .filter(|url| !url.trim().is_empty()),
        })
    }
}
