use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use super::{AppMode, AppState, FormField};
use crate::app::events::AppEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyCommand {
    Quit,
    CycleTrend,
    Reshuffle,
    NewSearch,
}

pub(crate) fn command_from_char(ch: char) -> Option<KeyCommand> {
    match ch {
        'q' => Some(KeyCommand::Quit),
        't' => Some(KeyCommand::CycleTrend),
        'r' => Some(KeyCommand::Reshuffle),
        'n' => Some(KeyCommand::NewSearch),
        _ => None,
    }
}

fn command_char(key: KeyEvent) -> Option<char> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    {
        return None;
    }
    if let KeyCode::Char(ch) = key.code {
        Some(ch.to_ascii_lowercase())
    } else {
        None
    }
}

fn is_ctrl_c(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'c'))
}

impl AppState {
    pub(super) async fn handle_input(
        &mut self,
        event: Event,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        if is_ctrl_c(key) {
            tx.send(AppEvent::Quit).await?;
            return Ok(());
        }

        match self.mode {
            AppMode::Search => self.handle_form_key(key, tx).await?,
            AppMode::Loading => {
                if key.code == KeyCode::Esc {
                    self.cancel_search();
                }
            }
            AppMode::SelectingLocation => match key.code {
                KeyCode::Char(digit @ '1'..='5') => {
                    let idx = (digit as usize) - ('1' as usize);
                    self.select_location(tx, idx);
                }
                KeyCode::Esc => self.cancel_search(),
                _ => {}
            },
            AppMode::Results => {
                if key.code == KeyCode::Esc {
                    self.start_over();
                } else if let Some(command) = command_char(key).and_then(command_from_char) {
                    self.handle_results_command(command, tx).await?;
                }
            }
            AppMode::Error => match key.code {
                KeyCode::Enter | KeyCode::Esc => self.start_over(),
                _ => match command_char(key).and_then(command_from_char) {
                    Some(KeyCommand::NewSearch) => self.start_over(),
                    Some(KeyCommand::Quit) => tx.send(AppEvent::Quit).await?,
                    _ => {}
                },
            },
            AppMode::Quit => {}
        }

        Ok(())
    }

    async fn handle_form_key(&mut self, key: KeyEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match key.code {
            KeyCode::Esc => tx.send(AppEvent::Quit).await?,
            KeyCode::Tab | KeyCode::BackTab => self.form.toggle_focus(),
            KeyCode::Enter => self.submit(tx),
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Up if self.form.focus == FormField::Date => {
                self.form.step_date(1, self.today);
            }
            KeyCode::Down if self.form.focus == FormField::Date => {
                self.form.step_date(-1, self.today);
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.form.insert(ch);
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_results_command(
        &mut self,
        command: KeyCommand,
        tx: &mpsc::Sender<AppEvent>,
    ) -> Result<()> {
        match command {
            KeyCommand::Quit => tx.send(AppEvent::Quit).await?,
            KeyCommand::CycleTrend => self.trend_metric = self.trend_metric.next(),
            KeyCommand::Reshuffle => {
                let count = self.recommendation_count();
                if let Some(report) = self.report.as_mut() {
                    report.reshuffle(count, &mut rand::rng());
                }
            }
            KeyCommand::NewSearch => self.start_over(),
        }
        Ok(())
    }
}
