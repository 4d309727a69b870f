#![allow(clippy::cast_precision_loss)]

use serde::Deserialize;

use crate::data::lenient;

/// Per-year values for the requested calendar day, as sent by the analysis service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HistoricalTrends {
    #[serde(deserialize_with = "lenient::option_i32_vec")]
    pub years: Vec<Option<i32>>,
    #[serde(deserialize_with = "lenient::option_f64_vec")]
    pub temperatures: Vec<Option<f64>>,
    #[serde(deserialize_with = "lenient::option_f64_vec")]
    pub humidities: Vec<Option<f64>>,
    #[serde(deserialize_with = "lenient::option_f64_vec")]
    pub wind_speeds: Vec<Option<f64>>,
    #[serde(deserialize_with = "lenient::option_f64_vec")]
    pub rain_chances_percent: Vec<Option<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendMetric {
    Temperature,
    Humidity,
    Rain,
    Wind,
}

impl TrendMetric {
    pub const ALL: [Self; 4] = [Self::Temperature, Self::Humidity, Self::Rain, Self::Wind];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Rain => "Rain",
            Self::Wind => "Wind",
        }
    }

    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity | Self::Rain => "%",
            Self::Wind => "km/h",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|m| *m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendPoint {
    pub year: i32,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub latest: Option<TrendPoint>,
}

impl HistoricalTrends {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.years.iter().all(Option::is_none)
    }

    fn values(&self, metric: TrendMetric) -> &[Option<f64>] {
        match metric {
            TrendMetric::Temperature => &self.temperatures,
            TrendMetric::Humidity => &self.humidities,
            TrendMetric::Rain => &self.rain_chances_percent,
            TrendMetric::Wind => &self.wind_speeds,
        }
    }

    /// Points ordered oldest to newest. Years without a value keep `None`;
    /// slots without a usable year are skipped.
    #[must_use]
    pub fn series(&self, metric: TrendMetric) -> Vec<TrendPoint> {
        let values = self.values(metric);
        let mut points: Vec<TrendPoint> = self
            .years
            .iter()
            .enumerate()
            .filter_map(|(idx, year)| {
                Some(TrendPoint {
                    year: (*year)?,
                    value: values.get(idx).copied().flatten().filter(|v| v.is_finite()),
                })
            })
            .collect();
        points.sort_by_key(|point| point.year);
        points
    }

    #[must_use]
    pub fn summary(&self, metric: TrendMetric) -> Option<TrendSummary> {
        let series = self.series(metric);
        let present: Vec<f64> = series.iter().filter_map(|point| point.value).collect();
        if present.is_empty() {
            return None;
        }
        let min = present.iter().copied().fold(f64::INFINITY, f64::min);
        let max = present.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = present.iter().sum::<f64>() / present.len() as f64;
        Some(TrendSummary {
            min,
            max,
            mean,
            latest: series.iter().rev().find(|point| point.value.is_some()).copied(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HistoricalTrends {
        HistoricalTrends {
            years: vec![Some(2024), Some(2023), Some(2022)],
            temperatures: vec![Some(21.5), None, Some(19.0)],
            humidities: vec![Some(60.0), Some(70.0), Some(80.0)],
            wind_speeds: vec![Some(12.0), Some(30.0)],
            rain_chances_percent: vec![Some(100.0), Some(0.0), Some(0.0)],
        }
    }

    #[test]
    fn series_is_oldest_first() {
        let series = sample().series(TrendMetric::Humidity);
        let years: Vec<_> = series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2022, 2023, 2024]);
        assert_eq!(series[0].value, Some(80.0));
    }

    #[test]
    fn short_value_columns_leave_gaps() {
        let series = sample().series(TrendMetric::Wind);
        assert_eq!(series[0], TrendPoint { year: 2022, value: None });
        assert_eq!(series[2].value, Some(12.0));
    }

    #[test]
    fn summary_skips_missing_years() {
        let summary = sample().summary(TrendMetric::Temperature).expect("summary");
        assert!((summary.min - 19.0).abs() < f64::EPSILON);
        assert!((summary.max - 21.5).abs() < f64::EPSILON);
        assert!((summary.mean - 20.25).abs() < 1e-9);
        assert_eq!(summary.latest.map(|p| p.year), Some(2024));
    }

    #[test]
    fn empty_trends_have_no_summary() {
        let trends = HistoricalTrends::default();
        assert!(trends.is_empty());
        assert!(trends.summary(TrendMetric::Rain).is_none());
    }

    #[test]
    fn metric_cycle_wraps() {
        assert_eq!(TrendMetric::Temperature.next(), TrendMetric::Humidity);
        assert_eq!(TrendMetric::Wind.next(), TrendMetric::Temperature);
    }

    #[test]
    fn decodes_null_entries() {
        let json = r#"{"years":[2020],"temperatures":[null],"humidities":[55.5],"wind_speeds":null}"#;
        let trends: HistoricalTrends = serde_json::from_str(json).expect("decode");
        assert_eq!(trends.temperatures, vec![None]);
        assert_eq!(trends.humidities, vec![Some(55.5)]);
        assert!(trends.wind_speeds.is_empty());
    }

    #[test]
    fn unreadable_year_does_not_shift_later_values() {
        let json = r#"{"years":[2024,"x",2022],"temperatures":[30.0,20.0,10.0]}"#;
        let trends: HistoricalTrends = serde_json::from_str(json).expect("decode");
        assert_eq!(
            trends.series(TrendMetric::Temperature),
            vec![
                TrendPoint { year: 2022, value: Some(10.0) },
                TrendPoint { year: 2024, value: Some(30.0) },
            ]
        );
    }

    #[test]
    fn float_years_are_accepted() {
        let json = r#"{"years":[2024.0,2023.0],"humidities":[70,65]}"#;
        let trends: HistoricalTrends = serde_json::from_str(json).expect("decode");
        assert_eq!(trends.years, vec![Some(2024), Some(2023)]);
        let series = trends.series(TrendMetric::Humidity);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0], TrendPoint { year: 2023, value: Some(65.0) });
    }
}
