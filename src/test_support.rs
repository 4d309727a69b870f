use chrono::NaiveDate;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    cli::{Cli, ColorArg},
    domain::{
        location::Location,
        observation::WeatherObservation,
        report::{AnalysisData, AnalysisReport, HistoricalOdds},
        trends::HistoricalTrends,
    },
};

/// Endpoints that refuse connections, so spawned searches fail fast.
const DEAD_URL: &str = "http://127.0.0.1:9";

pub(crate) fn state_test_cli() -> Cli {
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
        color: ColorArg::Auto,
        no_color: false,
        ascii_icons: false,
        emoji_icons: false,
        one_shot: false,
        log_file: None,
    }
}

pub(crate) fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 7, 14).expect("valid fixture date")
}

pub(crate) fn aracaju_location() -> Location {
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

pub(crate) fn sample_trends() -> HistoricalTrends {
    HistoricalTrends {
        years: vec![Some(2021), Some(2022), Some(2023), Some(2024)],
        temperatures: vec![Some(30.1), Some(31.4), None, Some(32.8)],
        humidities: vec![Some(60.0), Some(64.0), Some(66.0), Some(65.0)],
        wind_speeds: vec![Some(14.0), Some(16.5), Some(15.0), Some(13.2)],
        rain_chances_percent: vec![Some(0.0), Some(10.0), Some(5.0), Some(0.0)],
    }
}

/// Hot, dry day: hot 47%, everything else 0, comfort "Uncomfortable".
pub(crate) fn sample_report() -> AnalysisReport {
    let data = AnalysisData {
        observation: WeatherObservation::from_averages(32.0, 65.0, 0.0, 15.0),
        odds: HistoricalOdds {
            hot_day: Some(42.0),
            cold_day: Some(0.0),
            windy_day: Some(5.0),
            rainy_day: Some(10.0),
            based_on_years: Some(20),
        },
        trends: sample_trends(),
        satellite_url: Some("https://example.test/snapshot.jpg".to_string()),
    };
    let mut rng = StdRng::seed_from_u64(42);
    AnalysisReport::build(aracaju_location(), fixed_date(), data, 4, &mut rng)
}
