use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{
    cli::IconMode,
    domain::metrics::{ComfortLevel, ComfortResult},
    ui::theme::{Theme, comfort_color},
};

pub fn render(frame: &mut Frame, area: Rect, comfort: &ComfortResult, theme: &Theme, icons: IconMode) {
    let color = comfort_color(theme, comfort.level);
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", comfort.level.glyph(icons)),
                Style::default().fg(color),
            ),
            Span::styled(
                comfort.level.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Score {:.1} / 100", comfort.score),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            summary(comfort.level),
            Style::default().fg(theme.muted_text),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel_block("Comfort", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn summary(level: ComfortLevel) -> &'static str {
    match level {
        ComfortLevel::VeryComfortable => "Historically a great day to be outside.",
        ComfortLevel::Comfortable => "Usually pleasant, with minor risks.",
        ComfortLevel::Uncomfortable => "Expect some unpleasant weather.",
        ComfortLevel::VeryUncomfortable => "Adverse weather is likely. Plan ahead.",
    }
}
