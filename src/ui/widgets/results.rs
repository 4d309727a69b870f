use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{comfort, probability, recommendations, shared::panel_block, trends};
use crate::{
    app::state::AppState,
    cli::IconMode,
    domain::report::{AnalysisReport, HistoricalOdds},
    ui::theme::{Theme, temp_color},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme, icons: IconMode) {
    let Some(report) = &state.report else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(6),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, rows[0], report, theme, icons);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    render_conditions(frame, middle[0], report, theme);
    comfort::render(frame, middle[1], &report.comfort, theme, icons);

    probability::render(frame, rows[2], &report.probabilities, theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[3]);
    recommendations::render(frame, bottom[0], &report.recommendations, theme, icons);
    trends::render(frame, bottom[1], &report.trends, state.trend_metric, theme);

    render_satellite(frame, rows[4], report, theme);
}

fn render_header(frame: &mut Frame, area: Rect, report: &AnalysisReport, theme: &Theme, icons: IconMode) {
    let condition = report.observation.condition;
    let mut spans = vec![
        Span::styled(
            format!("{} ", condition.icon(icons)),
            Style::default().fg(theme.accent),
        ),
        Span::styled(
            report.location.display_name(),
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", report.date.format("%A, %B %-d, %Y")),
            Style::default().fg(theme.text),
        ),
        Span::styled(
            format!("  {}", condition.label()),
            Style::default().fg(theme.muted_text),
        ),
    ];
    if let Some(years) = report.odds.based_on_years {
        spans.push(Span::styled(
            format!("  ({years} years of data)"),
            Style::default().fg(theme.muted_text),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(panel_block("Forecast by history", theme));
    frame.render_widget(header, area);
}

fn render_conditions(frame: &mut Frame, area: Rect, report: &AnalysisReport, theme: &Theme) {
    let obs = &report.observation;
    let label = Style::default().fg(theme.muted_text);
    let value = Style::default()
        .fg(theme.text)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Temperature  ", label),
            Span::styled(
                format!("{:.1}°C", obs.temperature),
                value.fg(temp_color(theme, obs.temperature)),
            ),
        ]),
        Line::from(vec![
            Span::styled("Humidity     ", label),
            Span::styled(format!("{:.0}%", obs.humidity), value),
        ]),
        Line::from(vec![
            Span::styled("Rain chance  ", label),
            Span::styled(format!("{:.0}%", obs.rainfall), value),
        ]),
        Line::from(vec![
            Span::styled("Wind         ", label),
            Span::styled(format!("{:.1} km/h", obs.wind), value),
        ]),
    ];
    if let Some(odds) = odds_line(&report.odds) {
        lines.push(Line::from(Span::styled(odds, label)));
    }

    frame.render_widget(
        Paragraph::new(lines).block(panel_block("Typical conditions", theme)),
        area,
    );
}

/// Day counts reported by the service, omitted when it sent none.
fn odds_line(odds: &HistoricalOdds) -> Option<String> {
    let parts: Vec<String> = [
        ("hot", odds.hot_day),
        ("cold", odds.cold_day),
        ("windy", odds.windy_day),
        ("rainy", odds.rainy_day),
    ]
    .into_iter()
    .filter_map(|(name, value)| value.map(|v| format!("{name} {v:.0}%")))
    .collect();

    (!parts.is_empty()).then(|| format!("Past days: {}", parts.join("  ")))
}

fn render_satellite(frame: &mut Frame, area: Rect, report: &AnalysisReport, theme: &Theme) {
    let text = report.satellite_url.as_deref().map_or_else(
        || "Satellite view unavailable".to_string(),
        |url| format!("Satellite: {url}"),
    );
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(theme.muted_text)),
        area,
    );
}
