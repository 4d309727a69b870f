use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{
    app::state::{AppState, FormField, SearchForm},
    ui::theme::Theme,
};

const FORM_WIDTH: u16 = 64;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
    let block = panel_block("Climate Odds", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width.min(FORM_WIDTH);
    let form_area = Rect {
        x: inner.x + (inner.width - width) / 2,
        width,
        ..inner
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(form_area);

    let intro = Paragraph::new(
        "Odds of very hot, cold, windy or wet weather on any day, from decades of history.",
    )
    .style(Style::default().fg(theme.muted_text))
    .wrap(Wrap { trim: true });
    frame.render_widget(intro, rows[0]);

    let form = &state.form;
    render_field(frame, rows[1], form, FormField::Location, theme);
    render_field(frame, rows[2], form, FormField::Date, theme);

    if let Some(pin) = &form.pin {
        let marker = if form.pinned_location().is_some() {
            "Pin"
        } else {
            "Pin (ignored: location edited)"
        };
        let line = Line::from(vec![
            Span::styled(format!("{marker}: "), Style::default().fg(theme.muted_text)),
            Span::styled(pin.coords_label(), Style::default().fg(theme.accent)),
        ]);
        frame.render_widget(Paragraph::new(line), rows[3]);
    }

    if let Some(hint) = &form.hint {
        let hint = Paragraph::new(hint.as_str())
            .style(Style::default().fg(theme.warning))
            .wrap(Wrap { trim: true });
        frame.render_widget(hint, rows[4]);
    }
}

fn render_field(frame: &mut Frame, area: Rect, form: &SearchForm, field: FormField, theme: &Theme) {
    let focused = form.focus == field;
    let (title, value, placeholder) = match field {
        FormField::Location => (" Location ", form.location.as_str(), "City, region or place"),
        FormField::Date => (" Date (YYYY-MM-DD, ↑/↓) ", form.date.as_str(), "2025-07-14"),
    };

    let border = if focused {
        Style::default()
            .fg(theme.focus_border)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.border)
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border);

    let mut spans = if value.is_empty() && !focused {
        vec![Span::styled(placeholder, Style::default().fg(theme.muted_text))]
    } else {
        vec![Span::styled(value.to_string(), Style::default().fg(theme.text))]
    };
    if focused {
        spans.push(Span::styled(
            "▏",
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
