use tokio::sync::mpsc;
use tracing::info;

use super::{AppMode, AppState, FormField};
use crate::{
    app::{
        events::AppEvent,
        search::{spawn_analysis, spawn_pin_lookup, spawn_search},
    },
    domain::location::Location,
};

impl AppState {
    /// Validates the form and starts a search, replacing any search in flight.
    pub(crate) fn submit(&mut self, tx: &mpsc::Sender<AppEvent>) {
        if let Some(hint) = self.form.validation_hint() {
            self.form.hint = Some(hint.to_string());
            return;
        }
        let (Some(query), Some(date)) = (
            self.form.query().map(str::to_string),
            self.form.parsed_date(),
        ) else {
            return;
        };
        self.form.hint = None;

        if let Some(location) = self.form.pinned_location().cloned() {
            self.start_analysis(tx, location);
            return;
        }

        let generation = self.next_generation();
        info!(generation, %query, %date, "search started");
        self.begin_loading(format!("Searching for {query}..."));
        self.search = Some(spawn_search(tx, &self.settings, generation, query, date));
    }

    pub(crate) fn start_analysis(&mut self, tx: &mpsc::Sender<AppEvent>, location: Location) {
        let Some(date) = self.form.parsed_date() else {
            self.form.hint = Some("Date must be YYYY-MM-DD.".to_string());
            self.mode = AppMode::Search;
            return;
        };
        let generation = self.next_generation();
        info!(generation, location = %location.name, %date, "analysis started");
        self.begin_loading(format!(
            "Analysing {} on {}...",
            location.display_name(),
            date.format("%b %-d, %Y")
        ));
        self.search = Some(spawn_analysis(tx, &self.settings, generation, location, date));
    }

    pub(crate) fn start_pin_lookup(&mut self, tx: &mpsc::Sender<AppEvent>, lat: f64, lon: f64) {
        let generation = self.next_generation();
        self.begin_loading("Looking up pinned location...".to_string());
        self.search = Some(spawn_pin_lookup(tx, &self.settings, generation, lat, lon));
    }

    pub(crate) fn select_location(&mut self, tx: &mpsc::Sender<AppEvent>, idx: usize) {
        if let Some(location) = self.pending_locations.get(idx).cloned() {
            self.pending_locations.clear();
            self.start_analysis(tx, location);
        }
    }

    /// Drops the in-flight search (aborting it) and returns to the form.
    pub(crate) fn cancel_search(&mut self) {
        if self.search.take().is_some() || self.mode == AppMode::SelectingLocation {
            self.form.hint = Some("Search cancelled.".to_string());
        }
        self.pending_locations.clear();
        self.mode = AppMode::Search;
    }

    /// Back to the form with the previous query kept.
    pub(crate) fn start_over(&mut self) {
        self.search = None;
        self.report = None;
        self.last_error = None;
        self.pending_locations.clear();
        self.form.focus = FormField::Location;
        self.form.hint = None;
        self.mode = AppMode::Search;
    }

    fn begin_loading(&mut self, message: String) {
        self.loading_message = message;
        self.last_error = None;
        self.report = None;
        self.mode = AppMode::Loading;
    }

    fn next_generation(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }
}
