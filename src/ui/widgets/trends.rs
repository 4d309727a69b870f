use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::{panel_block, sparkline_blocks};
use crate::{
    domain::trends::{HistoricalTrends, TrendMetric},
    ui::theme::Theme,
};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    trends: &HistoricalTrends,
    metric: TrendMetric,
    theme: &Theme,
) {
    let title = format!("Trend: {} ({}) [t]", metric.label(), metric.unit());
    let block = panel_block(&title, theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(trend_lines(trends, metric, usize::from(inner.width), theme))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

fn trend_lines(
    trends: &HistoricalTrends,
    metric: TrendMetric,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let series = trends.series(metric);
    let Some(summary) = trends.summary(metric) else {
        return vec![Line::from(Span::styled(
            "No yearly trend data for this metric.",
            Style::default().fg(theme.muted_text),
        ))];
    };

    let values: Vec<Option<f64>> = series.iter().map(|point| point.value).collect();
    let spark_width = width.min(values.len().max(1) * 3);
    let sparkline = sparkline_blocks(&values, spark_width);

    let mut lines = vec![Line::from(Span::styled(
        sparkline,
        Style::default().fg(theme.accent),
    ))];
    if let (Some(first), Some(last)) = (series.first(), series.last()) {
        let first = first.year.to_string();
        let last = last.year.to_string();
        let gap = spark_width.saturating_sub(first.len() + last.len()).max(1);
        lines.push(Line::from(Span::styled(
            format!("{first}{}{last}", " ".repeat(gap)),
            Style::default().fg(theme.muted_text),
        )));
    }
    lines.push(Line::from(""));

    let unit = metric.unit();
    lines.push(Line::from(format!(
        "min {:.1}{unit}  mean {:.1}{unit}  max {:.1}{unit}",
        summary.min, summary.mean, summary.max
    )));
    if let Some(latest) = summary.latest
        && let Some(value) = latest.value
    {
        lines.push(Line::from(Span::styled(
            format!("Latest ({}): {value:.1}{unit}", latest.year),
            Style::default().fg(theme.text),
        )));
    }
    lines
}
