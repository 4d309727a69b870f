use chrono::{Duration, NaiveDate};

use crate::domain::location::Location;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Location,
    Date,
}

/// The search form: free-text place, a date and an optional dropped pin.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchForm {
    pub location: String,
    pub date: String,
    pub focus: FormField,
    pub hint: Option<String>,
    pub pin: Option<Location>,
}

impl SearchForm {
    pub fn new(location: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            location: location.into(),
            date: date.format(DATE_FORMAT).to_string(),
            focus: FormField::Location,
            hint: None,
            pin: None,
        }
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        Some(self.location.trim()).filter(|q| !q.is_empty())
    }

    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).ok()
    }

    /// The pin, as long as the location field still shows its name.
    #[must_use]
    pub fn pinned_location(&self) -> Option<&Location> {
        self.pin
            .as_ref()
            .filter(|pin| pin.name == self.location.trim())
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Location => FormField::Date,
            FormField::Date => FormField::Location,
        };
    }

    pub fn insert(&mut self, ch: char) {
        match self.focus {
            FormField::Location if is_city_char(ch) => self.location.push(ch),
            FormField::Date if (ch.is_ascii_digit() || ch == '-') && self.date.len() < 10 => {
                self.date.push(ch);
            }
            _ => return,
        }
        self.hint = None;
    }

    pub fn backspace(&mut self) {
        match self.focus {
            FormField::Location => self.location.pop(),
            FormField::Date => self.date.pop(),
        };
        self.hint = None;
    }

    /// Moves the date by `days`; an unparseable field restarts from `fallback`.
    pub fn step_date(&mut self, days: i64, fallback: NaiveDate) {
        let base = self.parsed_date().unwrap_or(fallback);
        let next = base
            .checked_add_signed(Duration::days(days))
            .unwrap_or(base);
        self.date = next.format(DATE_FORMAT).to_string();
        self.hint = None;
    }

    /// Explains why the form can't be submitted, if it can't.
    #[must_use]
    pub fn validation_hint(&self) -> Option<&'static str> {
        if self.query().is_none() {
            Some("Enter a location to search.")
        } else if self.parsed_date().is_none() {
            Some("Date must be YYYY-MM-DD.")
        } else {
            None
        }
    }
}

pub(crate) fn is_city_char(ch: char) -> bool {
    ch.is_alphanumeric() || matches!(ch, ' ' | '-' | '\'' | '’' | ',' | '.')
}
