use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{cli::IconMode, domain::recommendations::Recommendation, ui::theme::Theme};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    recommendations: &[&'static Recommendation],
    theme: &Theme,
    icons: IconMode,
) {
    let mut lines = Vec::with_capacity(recommendations.len() * 3);
    if recommendations.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing special to prepare for.",
            Style::default().fg(theme.muted_text),
        )));
    }
    for rec in recommendations {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", rec.icon.glyph(icons)),
                Style::default().fg(theme.accent),
            ),
            Span::styled(
                rec.title,
                Style::default()
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            rec.description,
            Style::default().fg(theme.muted_text),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .block(panel_block("Recommendations", theme))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
