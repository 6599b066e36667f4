use crate::ui::{
    message::AppMessage,
    state::{AppState, Focus},
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    /// Maps a key to a message for whatever currently has input priority:
    /// popups, then the modal, then the drawer, then the focused pane.
    pub fn handle_key(key: KeyEvent, state: &AppState) -> Option<AppMessage> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(AppMessage::Quit);
        }

        if state.ui.notification.is_some() {
            return Some(AppMessage::DismissNotification);
        }

        if state.ui.confirm.is_some() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    Some(AppMessage::Confirm(true))
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    Some(AppMessage::Confirm(false))
                }
                _ => None,
            };
        }

        if key.code == KeyCode::Esc {
            return Some(AppMessage::EscapeAll);
        }

        if state.modal_open() {
            return match key.code {
                KeyCode::Char('x') => Some(AppMessage::CloseModal),
                KeyCode::Char('f') => Some(AppMessage::ToggleModalFavourite),
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveDown),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveUp),
                _ => None,
            };
        }

        if state.ui.drawer_open {
            return match key.code {
                KeyCode::Char('F') | KeyCode::Char('x') => Some(AppMessage::CloseDrawer),
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveDown),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveUp),
                KeyCode::Enter | KeyCode::Char('o') => Some(AppMessage::OpenSelectedFavourite),
                KeyCode::Char('d') => Some(AppMessage::RemoveSelectedFavourite),
                KeyCode::Char('C') => Some(AppMessage::RequestClearFavourites),
                _ => None,
            };
        }

        match state.ui.focus {
            Focus::Search => match key.code {
                KeyCode::Enter => Some(AppMessage::SubmitSearch),
                KeyCode::Backspace => Some(AppMessage::InputBackspace),
                KeyCode::Char(c) => Some(AppMessage::InputChar(c)),
                _ => None,
            },
            Focus::Results => match key.code {
                KeyCode::Char('q') => Some(AppMessage::Quit),
                KeyCode::Char('/') => Some(AppMessage::FocusSearch),
                KeyCode::Down | KeyCode::Char('j') => Some(AppMessage::MoveDown),
                KeyCode::Up | KeyCode::Char('k') => Some(AppMessage::MoveUp),
                KeyCode::Enter | KeyCode::Char('v') => Some(AppMessage::ViewSelected),
                KeyCode::Char('f') => Some(AppMessage::ToggleSelectedFavourite),
                KeyCode::Char('F') => Some(AppMessage::ToggleDrawer),
                KeyCode::Char('a') => Some(AppMessage::RandomAccent),
                KeyCode::Char('H') => Some(AppMessage::Home),
                _ => None,
            },
        }
    }
}
