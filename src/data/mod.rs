pub mod analysis;
pub mod geocode;
pub mod lenient;
pub mod satellite;

use std::time::Duration;

use reqwest::Client;

use crate::cli::Cli;

pub const GEOCODE_URL: &str = "https://geocoding-api.open-meteo.com/v1/search";
pub const REVERSE_GEOCODE_URL: &str = "https://nominatim.openstreetmap.org/reverse";
pub const ANALYSIS_URL: &str = "http://127.0.0.1:5000/analyze";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Where the external collaborators live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub geocode_url: String,
    pub reverse_geocode_url: String,
    pub analysis_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            geocode_url: GEOCODE_URL.to_string(),
            reverse_geocode_url: REVERSE_GEOCODE_URL.to_string(),
            analysis_url: ANALYSIS_URL.to_string(),
        }
    }
}

impl Endpoints {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            geocode_url: cli.geocode_url.clone(),
            reverse_geocode_url: cli.reverse_geocode_url.clone(),
            analysis_url: cli.analysis_url.clone(),
        }
    }
}

pub(crate) fn http_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|err| {
            tracing::warn!(error = %err, "falling back to default HTTP client");
            Client::new()
        })
}
