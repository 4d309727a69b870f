use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Gauge},
};

use crate::{
    domain::metrics::{ProbabilityEntry, ProbabilityKind},
    ui::theme::{Theme, kind_color},
};

/// One gauge card per adverse condition, in calculator order.
pub fn render(frame: &mut Frame, area: Rect, probabilities: &[ProbabilityEntry], theme: &Theme) {
    if probabilities.is_empty() {
        return;
    }
    let count = u32::try_from(probabilities.len()).unwrap_or(1);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(probabilities.iter().map(|_| Constraint::Ratio(1, count)))
        .split(area);

    for (entry, column) in probabilities.iter().zip(columns.iter()) {
        frame.render_widget(card(entry, theme), *column);
    }
}

fn card(entry: &ProbabilityEntry, theme: &Theme) -> Gauge<'static> {
    let color = kind_color(theme, entry.kind);
    let tag = match entry.kind {
        ProbabilityKind::Danger => "risk",
        ProbabilityKind::Info => "chance",
    };
    Gauge::default()
        .block(
            Block::default()
                .title(format!(" {} ", entry.label()))
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .gauge_style(Style::default().fg(color).bg(theme.surface))
        .percent(u16::from(entry.value.min(100)))
        .label(format!("{}% {tag}", entry.value))
}
