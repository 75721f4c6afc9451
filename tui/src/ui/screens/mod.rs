pub mod form;

use anyhow::Result;
use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
}

pub enum Screen {
    Form(form::FormScreen),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form(s) => form::draw(f, s),
        }
    }

    /// # Errors
    /// Propagates failures from the model; they end the session.
    pub fn handle_key(&mut self, key: KeyCode) -> Result<Action> {
        match self {
            Screen::Form(s) => form::handle_key(s, key),
        }
    }
}
