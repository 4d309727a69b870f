pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    app::state::{AppMode, AppState},
    cli::IconMode,
    ui::theme::Theme,
};

pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 16;

pub fn render(frame: &mut Frame, state: &AppState, theme: &Theme, icons: IconMode) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().fg(theme.text).bg(theme.surface)),
        area,
    );

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("climate-odds"));
        frame.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let body = chunks[0];

    match state.mode {
        AppMode::Search | AppMode::Quit => widgets::search_form::render(frame, body, state, theme),
        AppMode::Loading => widgets::status::render_loading(frame, body, state, theme),
        AppMode::SelectingLocation => {
            widgets::search_form::render(frame, body, state, theme);
            let popup = widgets::shared::centered_rect(70, 60, body);
            widgets::selector::render(frame, popup, state, theme);
        }
        AppMode::Results => widgets::results::render(frame, body, state, theme, icons),
        AppMode::Error => widgets::status::render_error(frame, body, state, theme),
    }

    widgets::footer::render(frame, chunks[1], state, theme);
}
