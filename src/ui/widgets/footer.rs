use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::{AppMode, AppState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let mut spans = Vec::new();
    for (idx, (key, action)) in hints(state.mode).iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("  ", Style::default().fg(theme.muted_text)));
        }
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {action}"),
            Style::default().fg(theme.muted_text),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

pub(crate) fn hints(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Search => &[
            ("Enter", "search"),
            ("Tab", "switch field"),
            ("↑/↓", "change date"),
            ("Esc", "quit"),
        ],
        AppMode::Loading => &[("Esc", "cancel"), ("Ctrl+C", "quit")],
        AppMode::SelectingLocation => &[("1-5", "choose"), ("Esc", "cancel")],
        AppMode::Results => &[
            ("t", "next trend"),
            ("r", "reshuffle tips"),
            ("n", "new search"),
            ("q", "quit"),
        ],
        AppMode::Error => &[("Enter", "start over"), ("q", "quit")],
        AppMode::Quit => &[],
    }
}
