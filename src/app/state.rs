use anyhow::Result;
use chrono::{Local, NaiveDate};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::{
    app::{
        events::AppEvent,
        search::{InFlightSearch, SearchSettings},
    },
    cli::Cli,
    domain::{
        location::{GeocodeResolution, Location},
        report::AnalysisReport,
        trends::TrendMetric,
    },
    error::ServiceError,
};

mod form;
mod input;
mod methods_fetch;

pub use form::{FormField, SearchForm};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Search,
    Loading,
    SelectingLocation,
    Results,
    Error,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub form: SearchForm,
    pub loading_message: String,
    pub last_error: Option<String>,
    pub pending_locations: Vec<Location>,
    pub report: Option<AnalysisReport>,
    pub trend_metric: TrendMetric,
    today: NaiveDate,
    settings: SearchSettings,
    search: Option<InFlightSearch>,
    generation: u64,
    pin_request: Option<(f64, f64)>,
    auto_submit: bool,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        Self::with_today(cli, Local::now().date_naive())
    }

    pub fn with_today(cli: &Cli, today: NaiveDate) -> Self {
        let date = cli.date.unwrap_or(today);
        let mut form = SearchForm::new(cli.query().unwrap_or_default(), date);
        if let Some((lat, lon)) = cli.pin() {
            form.pin = Some(Location::from_coords(lat, lon));
            if form.location.is_empty() {
                form.location = Location::from_coords(lat, lon).name;
            }
        }

        Self {
            mode: AppMode::Search,
            running: true,
            form,
            loading_message: String::new(),
            last_error: None,
            pending_locations: Vec::new(),
            report: None,
            trend_metric: TrendMetric::Temperature,
            today,
            settings: SearchSettings::from_cli(cli),
            search: None,
            generation: 0,
            pin_request: cli.pin(),
            auto_submit: cli.date.is_some() && (cli.query().is_some() || cli.pin().is_some()),
        }
    }

    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        self.settings.recommendation_count
    }

    #[must_use]
    pub fn search_in_flight(&self) -> bool {
        self.search.is_some()
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        if let Some(generation) = event.generation()
            && !self.is_current(generation)
        {
            debug!(generation, current = self.generation, "ignoring stale search event");
            return Ok(());
        }

        match event {
            AppEvent::Bootstrap => {
                if let Some((lat, lon)) = self.pin_request.take() {
                    self.start_pin_lookup(tx, lat, lon);
                } else if self.auto_submit {
                    self.submit(tx);
                }
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::PinNamed { name, .. } => {
                self.search = None;
                self.apply_pin_name(name);
                self.mode = AppMode::Search;
                if self.auto_submit {
                    self.submit(tx);
                }
            }
            AppEvent::GeocodeResolved { resolution, .. } => {
                self.search = None;
                self.apply_resolution(resolution, tx);
            }
            AppEvent::AnalysisSucceeded { report, .. } => {
                self.search = None;
                info!(location = %report.location.name, date = %report.date, "showing results");
                self.report = Some(*report);
                self.trend_metric = TrendMetric::Temperature;
                self.last_error = None;
                self.mode = AppMode::Results;
            }
            AppEvent::SearchFailed { message, .. } => {
                self.search = None;
                self.show_error(message);
            }
            AppEvent::Quit => {
                self.search = None;
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.search
            .as_ref()
            .is_some_and(|search| search.generation() == generation)
    }

    fn apply_pin_name(&mut self, name: Option<String>) {
        let Some(pin) = self.form.pin.as_mut() else {
            return;
        };
        if let Some(name) = name {
            pin.name = name;
        }
        self.form.location.clone_from(&pin.name);
    }

    fn apply_resolution(&mut self, resolution: GeocodeResolution, tx: &mpsc::Sender<AppEvent>) {
        match resolution {
            GeocodeResolution::Selected(location) => self.start_analysis(tx, location),
            GeocodeResolution::NeedsDisambiguation(locations) => {
                self.pending_locations = locations;
                self.mode = AppMode::SelectingLocation;
                self.loading_message = format!(
                    "Choose a location (1-{})",
                    self.pending_locations.len().min(5)
                );
            }
            GeocodeResolution::NotFound(query) => {
                self.show_error(ServiceError::NotFound(query).user_message());
            }
        }
    }

    fn show_error(&mut self, message: String) {
        self.last_error = Some(message);
        self.mode = AppMode::Error;
    }
}
