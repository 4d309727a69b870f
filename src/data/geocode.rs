use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::{
    data::{Endpoints, http_client},
    domain::location::{GeocodeResolution, Location},
    error::ServiceError,
};

const SERVICE: &str = "geocoding";
const CANDIDATE_COUNT: &str = "5";
const AMBIGUOUS_POPULATION_RATIO: f64 = 1.10;

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    search_url: String,
    reverse_url: String,
}

impl GeocodeClient {
    #[must_use]
    pub fn new(endpoints: &Endpoints) -> Self {
        Self::with_urls(&endpoints.geocode_url, &endpoints.reverse_geocode_url)
    }

    pub fn with_urls(search_url: impl Into<String>, reverse_url: impl Into<String>) -> Self {
        Self {
            client: http_client(Duration::from_secs(8)),
            search_url: search_url.into(),
            reverse_url: reverse_url.into(),
        }
    }

    /// Forward lookup of free text, ranked and checked for ambiguity.
    pub async fn resolve(
        &self,
        query: &str,
        country_code: Option<&str>,
    ) -> Result<GeocodeResolution, ServiceError> {
        let query = query.trim();
        debug!(query, ?country_code, "geocoding location");

        let mut request = self.client.get(&self.search_url).query(&[
            ("name", query),
            ("count", CANDIDATE_COUNT),
            ("language", "en"),
            ("format", "json"),
        ]);
        if let Some(code) = country_code {
            request = request.query(&[("countryCode", code)]);
        }

        let payload: SearchResponse = send_json(request).await?;
        let results = payload.results.unwrap_or_default();
        if results.is_empty() {
            info!(query, "geocoding returned no candidates");
            return Ok(GeocodeResolution::NotFound(query.to_string()));
        }

        let mut ranked = rank_locations(results, query, country_code);
        let top = ranked.remove(0);

        if let Some(second) = ranked.first()
            && is_ambiguous(&top, second)
        {
            let mut options = vec![top.location];
            options.extend(ranked.into_iter().map(|s| s.location).take(4));
            info!(query, candidates = options.len(), "geocoding is ambiguous");
            return Ok(GeocodeResolution::NeedsDisambiguation(options));
        }

        Ok(GeocodeResolution::Selected(top.location))
    }

    /// Place name for a dropped pin, if the reverse geocoder knows one.
    pub async fn reverse(&self, latitude: f64, longitude: f64) -> Result<Option<String>, ServiceError> {
        debug!(latitude, longitude, "reverse geocoding pin");
        let request = self.client.get(&self.reverse_url).query(&[
            ("format", "json".to_string()),
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
        ]);

        let payload: ReverseResponse = send_json(request).await?;
        Ok(payload.address.and_then(ReverseAddress::place_name))
    }
}

async fn send_json<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, ServiceError> {
    let response = request
        .send()
        .await
        .map_err(|source| ServiceError::Transport {
            service: SERVICE,
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ServiceError::Status {
            service: SERVICE,
            status: status.as_u16(),
            message: None,
        });
    }

    response.json().await.map_err(|source| ServiceError::Decode {
        service: SERVICE,
        source,
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Option<Vec<SearchResult>>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    name: String,
    latitude: f64,
    longitude: f64,
    country: Option<String>,
    country_code: Option<String>,
    admin1: Option<String>,
    timezone: Option<String>,
    population: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ReverseResponse {
    address: Option<ReverseAddress>,
}

#[derive(Debug, Deserialize)]
struct ReverseAddress {
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
    county: Option<String>,
}

impl ReverseAddress {
    fn place_name(self) -> Option<String> {
        [self.city, self.town, self.village, self.county]
            .into_iter()
            .flatten()
            .map(|name| name.trim().to_string())
            .find(|name| !name.is_empty())
    }
}

#[derive(Debug)]
struct Candidate {
    location: Location,
    exact_name_match: bool,
    country_match: bool,
    population: u64,
    api_order: usize,
}

fn rank_locations(
    results: Vec<SearchResult>,
    query: &str,
    country_code: Option<&str>,
) -> Vec<Candidate> {
    let wanted = normalize(query);

    let mut ranked: Vec<Candidate> = results
        .into_iter()
        .enumerate()
        .map(|(api_order, entry)| {
            let exact_name_match = normalize(&entry.name) == wanted;
            let country_match = match (country_code, entry.country_code.as_deref()) {
                (Some(bias), Some(actual)) => actual.eq_ignore_ascii_case(bias),
                _ => false,
            };
            Candidate {
                exact_name_match,
                country_match,
                population: entry.population.unwrap_or_default(),
                api_order,
                location: Location {
                    name: entry.name,
                    latitude: entry.latitude,
                    longitude: entry.longitude,
                    country: entry.country,
                    admin1: entry.admin1,
                    timezone: entry.timezone,
                    population: entry.population,
                },
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.exact_name_match
            .cmp(&a.exact_name_match)
            .then_with(|| b.country_match.cmp(&a.country_match))
            .then_with(|| b.population.cmp(&a.population))
            .then_with(|| a.api_order.cmp(&b.api_order))
    });
    ranked
}

#[allow(clippy::cast_precision_loss)]
fn is_ambiguous(top: &Candidate, second: &Candidate) -> bool {
    if top.exact_name_match != second.exact_name_match || top.country_match != second.country_match
    {
        return false;
    }
    let larger = top.population.max(second.population).max(1) as f64;
    let smaller = top.population.min(second.population).max(1) as f64;
    larger / smaller <= AMBIGUOUS_POPULATION_RATIO
}

fn normalize(value: &str) -> String {
    value
        .trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
