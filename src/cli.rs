#![allow(clippy::missing_errors_doc)]

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::data::{ANALYSIS_URL, GEOCODE_URL, REVERSE_GEOCODE_URL};

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
    Emoji,
}

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Parser, Clone)]
#[command(
    name = "climate-odds",
    version,
    about = "Historical weather odds for any place and date"
)]
pub struct Cli {
    /// Location to analyse (prefills the search form)
    pub location: Option<String>,

    /// Target date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    /// Pin latitude (requires --lon)
    #[arg(long, allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Pin longitude (requires --lat)
    #[arg(long, allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Geocode bias (ISO2)
    #[arg(long)]
    pub country_code: Option<String>,

    /// Weather-analysis endpoint
    #[arg(long, env = "CLIMATE_ODDS_ANALYSIS_URL", default_value = ANALYSIS_URL)]
    pub analysis_url: String,

    /// Forward geocoding endpoint
    #[arg(long, env = "CLIMATE_ODDS_GEOCODE_URL", default_value = GEOCODE_URL)]
    pub geocode_url: String,

    /// Reverse geocoding endpoint used for pins
    #[arg(long, env = "CLIMATE_ODDS_REVERSE_GEOCODE_URL", default_value = REVERSE_GEOCODE_URL)]
    pub reverse_geocode_url: String,

    /// Number of recommendations to show (1..12)
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub recommendations: u8,

    /// Color output policy
    #[arg(long, value_enum, default_value_t = ColorArg::Auto, conflicts_with = "no_color")]
    pub color: ColorArg,

    /// Alias for --color never
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Force ASCII icons
    #[arg(long, conflicts_with = "emoji_icons")]
    pub ascii_icons: bool,

    /// Force emoji icons
    #[arg(long)]
    pub emoji_icons: bool,

    /// Print the analysis to stdout and exit (non-interactive)
    #[arg(long)]
    pub one_shot: bool,

    /// Write logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        match (self.lat, self.lon) {
            (Some(_), None) | (None, Some(_)) => {
                anyhow::bail!("--lat and --lon must be provided together")
            }
            (Some(lat), Some(lon)) => {
                if !(-90.0..=90.0).contains(&lat) {
                    anyhow::bail!("--lat must be between -90 and 90");
                }
                if !(-180.0..=180.0).contains(&lon) {
                    anyhow::bail!("--lon must be between -180 and 180");
                }
            }
            (None, None) => {}
        }

        if self.one_shot && self.query().is_none() && self.pin().is_none() {
            anyhow::bail!("--one-shot needs a location or --lat/--lon");
        }
        Ok(())
    }

    /// Trimmed location text, if any.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    #[must_use]
    pub fn pin(&self) -> Option<(f64, f64)> {
        self.lat.zip(self.lon)
    }

    #[must_use]
    pub fn effective_color_mode(&self) -> ColorArg {
        if self.no_color {
            ColorArg::Never
        } else {
            self.color
        }
    }

    #[must_use]
    pub fn icon_mode(&self) -> IconMode {
        if self.ascii_icons {
            IconMode::Ascii
        } else if self.emoji_icons {
            IconMode::Emoji
        } else {
            IconMode::Unicode
        }
    }

    #[must_use]
    pub fn recommendation_count(&self) -> usize {
        usize::from(self.recommendations)
    }
}
