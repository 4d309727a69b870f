use std::io::Write;

use anyhow::{Context, Result, anyhow};
use chrono::Local;
use tracing::warn;

use crate::{
    app::search::{SearchSettings, analyze_location},
    cli::{Cli, IconMode},
    data::geocode::GeocodeClient,
    domain::{
        location::{GeocodeResolution, Location},
        metrics::ProbabilityKind,
        report::AnalysisReport,
        trends::TrendMetric,
    },
    error::ServiceError,
};

const BAR_WIDTH: usize = 20;

/// Runs one search without the TUI and prints the report to stdout.
pub async fn run(cli: &Cli) -> Result<()> {
    let settings = SearchSettings::from_cli(cli);
    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    let (location, note) = resolve(cli, &settings)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;
    let report = analyze_location(&settings, location, date)
        .await
        .map_err(|err| anyhow!(err.user_message()))?;

    let mut stdout = std::io::stdout().lock();
    if let Some(note) = note {
        writeln!(stdout, "{note}").context("writing report failed")?;
    }
    writeln!(stdout, "{}", render_text(&report, cli.icon_mode()))
        .context("writing report failed")?;
    Ok(())
}

/// Picks the place to analyse. Ambiguity is settled by taking the top-ranked
/// candidate and returning a note saying so.
async fn resolve(
    cli: &Cli,
    settings: &SearchSettings,
) -> Result<(Location, Option<String>), ServiceError> {
    let geocoder = GeocodeClient::new(&settings.endpoints);

    if let Some((lat, lon)) = cli.pin() {
        let mut location = Location::from_coords(lat, lon);
        match geocoder.reverse(lat, lon).await {
            Ok(Some(name)) => location.name = name,
            Ok(None) => {}
            Err(err) => warn!(error = %err, "reverse geocoding failed"),
        }
        return Ok((location, None));
    }

    let query = cli.query().unwrap_or_default();
    match geocoder
        .resolve(query, settings.country_code.as_deref())
        .await?
    {
        GeocodeResolution::Selected(location) => Ok((location, None)),
        GeocodeResolution::NeedsDisambiguation(options) => {
            let count = options.len();
            let top = options
                .into_iter()
                .next()
                .ok_or_else(|| ServiceError::NotFound(query.to_string()))?;
            let note = format!(
                "\"{query}\" matched {count} places; using {}.",
                top.display_name()
            );
            Ok((top, Some(note)))
        }
        GeocodeResolution::NotFound(query) => Err(ServiceError::NotFound(query)),
    }
}

#[must_use]
pub fn render_text(report: &AnalysisReport, icons: IconMode) -> String {
    let obs = &report.observation;
    let mut lines = vec![
        format!("Climate odds for {}", report.location.display_name()),
        format!(
            "Date: {}{}",
            report.date.format("%Y-%m-%d"),
            report
                .odds
                .based_on_years
                .map(|years| format!(" (based on {years} years of history)"))
                .unwrap_or_default()
        ),
        String::new(),
        "Typical conditions".to_string(),
        format!("  Temperature   {:.1} °C", obs.temperature),
        format!("  Humidity      {:.0} %", obs.humidity),
        format!("  Rain chance   {:.0} %", obs.rainfall),
        format!("  Wind          {:.1} km/h", obs.wind),
        format!(
            "  Sky           {} {}",
            obs.condition.icon(icons),
            obs.condition.label()
        ),
        String::new(),
        "Adverse-weather probabilities".to_string(),
    ];

    for entry in &report.probabilities {
        let kind = match entry.kind {
            ProbabilityKind::Danger => "danger",
            ProbabilityKind::Info => "info",
        };
        lines.push(format!(
            "  {:<12} {:>3}%  [{}]  {kind}",
            entry.label(),
            entry.value,
            bar(entry.value)
        ));
    }

    lines.push(String::new());
    lines.push(format!(
        "Comfort: {} {} (score {:.1})",
        report.comfort.level.glyph(icons),
        report.comfort.level.label(),
        report.comfort.score
    ));

    lines.push(String::new());
    lines.push("Recommendations".to_string());
    if report.recommendations.is_empty() {
        lines.push("  (none)".to_string());
    }
    for rec in &report.recommendations {
        lines.push(format!(
            "  {} {}: {}",
            rec.icon.glyph(icons),
            rec.title,
            rec.description
        ));
    }

    let odds = [
        ("Hot days", report.odds.hot_day),
        ("Cold days", report.odds.cold_day),
        ("Windy days", report.odds.windy_day),
        ("Rainy days", report.odds.rainy_day),
    ];
    if odds.iter().any(|(_, value)| value.is_some()) {
        lines.push(String::new());
        lines.push("Historical day counts".to_string());
        for (label, value) in odds {
            if let Some(value) = value {
                lines.push(format!("  {label:<12} {value:.0}%"));
            }
        }
    }

    if !report.trends.is_empty() {
        lines.push(String::new());
        lines.push("Trend by year".to_string());
        lines.extend(trend_table(report));
    }

    if let Some(url) = &report.satellite_url {
        lines.push(String::new());
        lines.push(format!("Satellite view: {url}"));
    }

    lines.join("\n")
}

fn trend_table(report: &AnalysisReport) -> Vec<String> {
    let header = TrendMetric::ALL
        .iter()
        .map(|metric| format!("{:>14}", format!("{} {}", metric.label(), metric.unit())))
        .collect::<String>();
    let mut rows = vec![format!("  {:<6}{header}", "Year")];

    let columns: Vec<_> = TrendMetric::ALL
        .iter()
        .map(|metric| report.trends.series(*metric))
        .collect();
    let years = columns.first().map(Vec::len).unwrap_or_default();
    for idx in 0..years {
        let year = columns[0][idx].year;
        let cells = columns
            .iter()
            .map(|series| match series[idx].value {
                Some(value) => format!("{value:>14.1}"),
                None => format!("{:>14}", "-"),
            })
            .collect::<String>();
        rows.push(format!("  {year:<6}{cells}"));
    }
    rows
}

fn bar(value: u8) -> String {
    let filled = usize::from(value.min(100)) * BAR_WIDTH / 100;
    format!("{}{}", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}
