use chrono::{Datelike, Local, NaiveDate};
use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, info, warn};

use crate::{
    app::events::AppEvent,
    cli::Cli,
    data::{Endpoints, analysis::AnalysisClient, geocode::GeocodeClient, satellite},
    domain::{
        location::{GeocodeResolution, Location},
        report::{AnalysisData, AnalysisReport},
    },
    error::ServiceError,
};

/// What every search needs besides the query itself.
#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub endpoints: Endpoints,
    pub country_code: Option<String>,
    pub recommendation_count: usize,
}

impl SearchSettings {
    #[must_use]
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            endpoints: Endpoints::from_cli(cli),
            country_code: cli.country_code.clone(),
            recommendation_count: cli.recommendation_count(),
        }
    }
}

/// Owns the one background search task. Dropping it aborts the task, so
/// replacing or clearing the guard is how a search gets cancelled.
#[derive(Debug)]
pub struct InFlightSearch {
    generation: u64,
    handle: JoinHandle<()>,
}

impl InFlightSearch {
    #[must_use]
    pub fn new(generation: u64, handle: JoinHandle<()>) -> Self {
        Self { generation, handle }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for InFlightSearch {
    fn drop(&mut self) {
        if !self.handle.is_finished() {
            debug!(generation = self.generation, "cancelling search");
            self.handle.abort();
        }
    }
}

/// Geocodes `query` and, when it resolves to a single place, runs the analysis.
pub fn spawn_search(
    tx: &mpsc::Sender<AppEvent>,
    settings: &SearchSettings,
    generation: u64,
    query: String,
    date: NaiveDate,
) -> InFlightSearch {
    let tx = tx.clone();
    let settings = settings.clone();
    let handle = tokio::spawn(async move {
        let geocoder = GeocodeClient::new(&settings.endpoints);
        let resolution = match geocoder
            .resolve(&query, settings.country_code.as_deref())
            .await
        {
            Ok(resolution) => resolution,
            Err(err) => {
                send_failure(&tx, generation, &err).await;
                return;
            }
        };

        match resolution {
            GeocodeResolution::Selected(location) => {
                run_analysis(&tx, &settings, generation, location, date).await;
            }
            other => {
                let _ = tx
                    .send(AppEvent::GeocodeResolved {
                        generation,
                        resolution: other,
                    })
                    .await;
            }
        }
    });
    InFlightSearch::new(generation, handle)
}

/// Runs the analysis for an already-resolved place.
pub fn spawn_analysis(
    tx: &mpsc::Sender<AppEvent>,
    settings: &SearchSettings,
    generation: u64,
    location: Location,
    date: NaiveDate,
) -> InFlightSearch {
    let tx = tx.clone();
    let settings = settings.clone();
    let handle = tokio::spawn(async move {
        run_analysis(&tx, &settings, generation, location, date).await;
    });
    InFlightSearch::new(generation, handle)
}

/// Names a dropped pin. A failed lookup is not fatal: the form falls back to
/// the coordinates.
pub fn spawn_pin_lookup(
    tx: &mpsc::Sender<AppEvent>,
    settings: &SearchSettings,
    generation: u64,
    latitude: f64,
    longitude: f64,
) -> InFlightSearch {
    let tx = tx.clone();
    let settings = settings.clone();
    let handle = tokio::spawn(async move {
        let geocoder = GeocodeClient::new(&settings.endpoints);
        let name = match geocoder.reverse(latitude, longitude).await {
            Ok(name) => name,
            Err(err) => {
                warn!(error = %err, "reverse geocoding failed");
                None
            }
        };
        let _ = tx.send(AppEvent::PinNamed { generation, name }).await;
    });
    InFlightSearch::new(generation, handle)
}

async fn run_analysis(
    tx: &mpsc::Sender<AppEvent>,
    settings: &SearchSettings,
    generation: u64,
    location: Location,
    date: NaiveDate,
) {
    let event = match analyze_location(settings, location, date).await {
        Ok(report) => AppEvent::AnalysisSucceeded {
            generation,
            report: Box::new(report),
        },
        Err(err) => {
            send_failure(tx, generation, &err).await;
            return;
        }
    };
    let _ = tx.send(event).await;
}

async fn send_failure(tx: &mpsc::Sender<AppEvent>, generation: u64, err: &ServiceError) {
    warn!(generation, error = %err, "search failed");
    let _ = tx
        .send(AppEvent::SearchFailed {
            generation,
            message: err.user_message(),
        })
        .await;
}

/// Fetches the analysis for `location` and derives the full report.
pub async fn analyze_location(
    settings: &SearchSettings,
    location: Location,
    date: NaiveDate,
) -> Result<AnalysisReport, ServiceError> {
    let client = AnalysisClient::new(&settings.endpoints);
    let mut data = client.analyze(&location, date).await?;
    if data.satellite_url.is_none() {
        data.satellite_url = Some(satellite::snapshot_url(
            &location,
            date,
            Local::now().year(),
        ));
    }
    info!(location = %location.name, %date, "analysis complete");
    Ok(build_report(
        location,
        date,
        data,
        settings.recommendation_count,
    ))
}

fn build_report(
    location: Location,
    date: NaiveDate,
    data: AnalysisData,
    recommendation_count: usize,
) -> AnalysisReport {
    let mut rng = rand::rng();
    AnalysisReport::build(location, date, data, recommendation_count, &mut rng)
}
