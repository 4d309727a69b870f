use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{app::state::AppState, ui::theme::Theme};

pub fn render_loading(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block("Loading", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            state.loading_message.clone(),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Crunching decades of observations for this day...",
            Style::default().fg(theme.muted_text),
        )),
    ];
    render_centered(frame, inner, lines);
}

pub fn render_error(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block("Something went wrong", theme)
        .border_style(Style::default().fg(theme.danger));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let message = state
        .last_error
        .clone()
        .unwrap_or_else(|| "Unknown error".to_string());
    let lines = vec![
        Line::from(Span::styled(
            message,
            Style::default()
                .fg(theme.danger)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Enter: start over",
            Style::default().fg(theme.text),
        )),
    ];
    render_centered(frame, inner, lines);
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let height = u16::try_from(lines.len() + 1).unwrap_or(u16::MAX);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);
    let text = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(text, rows[1]);
}
