//! Key bindings for each screen.

use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, UiEvent};
use crate::navigation::NavigationState;

pub fn handle_key(app: &mut App, key: KeyEvent) -> Option<UiEvent> {
    match app.screen() {
        NavigationState::Selection => handle_selection_input(app, key),
        NavigationState::Calculation => handle_calculation_input(app, key),
    }
}

fn handle_selection_input(app: &mut App, key: KeyEvent) -> Option<UiEvent> {
    let labels = app.rates.labels();
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => {
            if app.menu_cursor + 1 < labels.len() {
                app.menu_cursor += 1;
            }
            Some(UiEvent::TermChosen(labels[app.menu_cursor].to_string()))
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.menu_cursor = app.menu_cursor.saturating_sub(1);
            Some(UiEvent::TermChosen(labels[app.menu_cursor].to_string()))
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => Some(UiEvent::NavigateForward),
        KeyCode::Esc | KeyCode::Char('q') => Some(UiEvent::ExitRequested),
        _ => None,
    }
}

fn handle_calculation_input(app: &mut App, key: KeyEvent) -> Option<UiEvent> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == '-' => {
            app.principal_input.push(c);
            None
        }
        KeyCode::Backspace => {
            app.principal_input.pop();
            None
        }
        KeyCode::Enter => Some(UiEvent::CalculateRequested(app.principal_input.clone())),
        KeyCode::Esc | KeyCode::Left => Some(UiEvent::NavigateBack),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(UiEvent::ExitRequested),
        _ => None,
    }
}
