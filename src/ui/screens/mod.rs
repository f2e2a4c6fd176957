pub mod form;
pub mod unavailable;

use crossterm::event::KeyCode;
use ratatui::Frame;

pub enum Action {
    None,
    Quit,
    Transition(Screen),
}

pub enum Screen {
    Form(form::FormScreen),
    Unavailable(unavailable::UnavailableState),
}

impl Screen {
    pub fn draw(&self, f: &mut Frame) {
        match self {
            Screen::Form(s) => form::draw(f, s),
            Screen::Unavailable(s) => unavailable::draw(f, s),
        }
    }

    pub fn handle_key(&mut self, key: KeyCode) -> Action {
        match self {
            Screen::Form(s) => form::handle_key(s, key),
            Screen::Unavailable(s) => unavailable::handle_key(s, key),
        }
    }
}
