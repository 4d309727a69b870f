use chrono::{Datelike, NaiveDate};

use crate::domain::location::Location;

const GIBS_BASE_URL: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg4326/best";
const GIBS_LAYER: &str = "MODIS_Terra_CorrectedReflectance_TrueColor";
const BBOX_HALF_SIZE_DEG: f64 = 0.25;

/// True-colour satellite snapshot of `location` on the requested month and day
/// of the year before `current_year`.
#[must_use]
pub fn snapshot_url(location: &Location, requested: NaiveDate, current_year: i32) -> String {
    let imagery_date = same_day_in_year(requested, current_year - 1);
    let lat = location.latitude;
    let lon = location.longitude;
    format!(
        "{GIBS_BASE_URL}/{GIBS_LAYER}/default/{}/250m/{:.4},{:.4},{:.4},{:.4}?format=image/jpeg",
        imagery_date.format("%Y-%m-%d"),
        lon - BBOX_HALF_SIZE_DEG,
        lat - BBOX_HALF_SIZE_DEG,
        lon + BBOX_HALF_SIZE_DEG,
        lat + BBOX_HALF_SIZE_DEG,
    )
}

/// `date` moved into `year`; Feb 29 becomes Feb 28 in non-leap years.
fn same_day_in_year(date: NaiveDate, year: i32) -> NaiveDate {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), 28))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn url_uses_previous_year_and_bbox() {
        let location = Location::from_coords(-10.9472, -37.0731);
        let url = snapshot_url(&location, date(2026, 3, 9), 2026);
        assert_eq!(
            url,
            "https://gibs.earthdata.nasa.gov/wmts/epsg4326/best/MODIS_Terra_CorrectedReflectance_TrueColor/default/2025-03-09/250m/-37.3231,-11.1972,-36.8231,-10.6972?format=image/jpeg"
        );
    }

    #[test]
    fn leap_day_falls_back_to_feb_28() {
        assert_eq!(same_day_in_year(date(2024, 2, 29), 2025), date(2025, 2, 28));
        assert_eq!(same_day_in_year(date(2024, 2, 29), 2028), date(2028, 2, 29));
    }
}
