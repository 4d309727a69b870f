use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem},
};

use super::shared::popup_block;
use crate::{app::state::AppState, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let items = state
        .pending_locations
        .iter()
        .take(5)
        .enumerate()
        .map(|(idx, loc)| {
            let population = loc
                .population
                .map(|p| format!("  pop. {p}"))
                .unwrap_or_default();
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}. ", idx + 1), Style::default().fg(theme.accent)),
                Span::raw(loc.display_name()),
                Span::styled(population, Style::default().fg(theme.muted_text)),
            ]))
        })
        .collect::<Vec<_>>();

    let list = List::new(items).block(popup_block(" Select location 1-5 (Esc cancels) ", theme));
    frame.render_widget(list, area);
}
