#![allow(dead_code)]

use chrono::NaiveDate;
use climate_odds::{
    app::state::{AppMode, AppState},
    cli::{Cli, ColorArg},
    domain::{
        location::Location,
        observation::WeatherObservation,
        report::{AnalysisData, AnalysisReport, HistoricalOdds},
        trends::HistoricalTrends,
    },
};
use rand::{SeedableRng, rngs::StdRng};

const DEAD_URL: &str = "http://127.0.0.1:9";

pub fn test_cli() -> Cli {
    Cli {
        location: None,
        date: None,
        lat: None,
        lon: None,
        country_code: None,
        analysis_url: format!("{DEAD_URL}/analyze"),
        geocode_url: format!("{DEAD_URL}/v1/search"),
        reverse_geocode_url: format!("{DEAD_URL}/reverse"),
        recommendations: 4,
        color: ColorArg::Never,
        no_color: false,
        ascii_icons: true,
        emoji_icons: false,
        one_shot: false,
        log_file: None,
    }
}

/// CLI whose three endpoints all point at one mock server.
pub fn mock_cli(base: &str) -> Cli {
    Cli {
        analysis_url: format!("{base}/analyze"),
        geocode_url: format!("{base}/v1/search"),
        reverse_geocode_url: format!("{base}/reverse"),
        ..test_cli()
    }
}

pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid fixture date")
}

pub fn aracaju() -> Location {
    Location {
        name: "Aracaju".to_string(),
        latitude: -10.9472,
        longitude: -37.0731,
        country: Some("Brazil".to_string()),
        admin1: Some("Sergipe".to_string()),
        timezone: Some("America/Maceio".to_string()),
        population: Some(571_149),
    }
}

pub fn fixture_trends() -> HistoricalTrends {
    HistoricalTrends {
        years: vec![Some(2021), Some(2022), Some(2023), Some(2024)],
        temperatures: vec![Some(30.1), Some(31.4), None, Some(32.8)],
        humidities: vec![Some(60.0), Some(64.0), Some(66.0), Some(65.0)],
        wind_speeds: vec![Some(14.0), Some(16.5), Some(15.0), Some(13.2)],
        rain_chances_percent: vec![Some(0.0), Some(10.0), Some(5.0), Some(0.0)],
    }
}

/// Hot and dry: hot 47%, other risks 0, comfort score 43.6.
pub fn fixture_report() -> AnalysisReport {
    let data = AnalysisData {
        observation: WeatherObservation::from_averages(32.0, 65.0, 0.0, 15.0),
        odds: HistoricalOdds {
            hot_day: Some(42.0),
            cold_day: Some(0.0),
            windy_day: Some(5.0),
            rainy_day: Some(10.0),
            based_on_years: Some(20),
        },
        trends: fixture_trends(),
        satellite_url: Some("https://example.test/snapshot.jpg".to_string()),
    };
    let mut rng = StdRng::seed_from_u64(7);
    AnalysisReport::build(aracaju(), fixed_date(), data, 4, &mut rng)
}

pub fn results_state(cli: &Cli) -> AppState {
    let mut state = AppState::with_today(cli, fixed_date());
    state.report = Some(fixture_report());
    state.mode = AppMode::Results;
    state
}

pub const ANALYSIS_BODY: &str = r#"
{
  "location": "Aracaju",
  "requested_date": "2025-07-14",
  "weather_analysis": {
    "average_temperature_celsius": 32.0,
    "average_humidity_percent": 65.0,
    "average_wind_speed_kmh": 15.0,
    "chance_of_any_rain_percent": 0,
    "chance_of_hot_day_percent": 42,
    "chance_of_cold_day_percent": 0,
    "chance_of_windy_day_percent": 5,
    "chance_of_rainy_day_percent": 10,
    "analysis_based_on_years": 20,
    "historical_trends": {
      "years": [2021, 2022, 2023, 2024],
      "temperatures": [30.1, 31.4, null, 32.8],
      "humidities": [60, 64, 66, 65],
      "wind_speeds": [14.0, 16.5, 15.0, 13.2],
      "rain_chances_percent": [0, 10, 5, 0]
    }
  },
  "nasa_satellite_view_url": "https://example.test/snapshot.jpg"
}
"#;

pub const ARACAJU_SEARCH_BODY: &str = r#"
{
  "results": [
    {
      "name": "Aracaju",
      "latitude": -10.9472,
      "longitude": -37.0731,
      "country": "Brazil",
      "country_code": "BR",
      "admin1": "Sergipe",
      "timezone": "America/Maceio",
      "population": 571149
    }
  ]
}
"#;
