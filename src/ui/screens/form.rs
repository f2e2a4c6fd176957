use crossterm::event::KeyCode;
use inference::InferenceAdapter;
use log::warn;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    state::form::{Field, FormState},
    ui::{layout, theme::Theme, widgets},
};

use super::{Action, Screen, unavailable::UnavailableState};

const KEYS: &[(&str, &str)] = &[
    ("↑↓", "move"),
    ("←→", "adjust"),
    ("0-9 .", "type"),
    ("enter", "predict"),
    ("esc", "quit"),
];

pub struct FormScreen {
    pub form: FormState,
    adapter: InferenceAdapter,
}

impl FormScreen {
    pub fn new(adapter: InferenceAdapter) -> Self {
        Self {
            form: FormState::new(),
            adapter,
        }
    }
}

pub fn handle_key(state: &mut FormScreen, key: KeyCode) -> Action {
    let form = &mut state.form;

    match key {
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Up | KeyCode::BackTab => {
            form.focus_prev();
            Action::None
        }
        KeyCode::Down | KeyCode::Tab => {
            form.focus_next();
            Action::None
        }
        KeyCode::Left => {
            form.decrement();
            Action::None
        }
        KeyCode::Right => {
            form.increment();
            Action::None
        }
        KeyCode::Backspace => {
            form.backspace();
            Action::None
        }
        KeyCode::Char(c) => {
            form.push_char(c);
            Action::None
        }
        KeyCode::Enter if form.focus() == Field::Predict => match form.predict(&state.adapter) {
            Ok(()) => Action::None,
            Err(e) => {
                warn!("model became unavailable: {e}");
                Action::Transition(Screen::Unavailable(UnavailableState::from_err(&e)))
            }
        },
        KeyCode::Enter => {
            form.focus_next();
            Action::None
        }
        _ => Action::None,
    }
}

fn hint(field: Field) -> &'static str {
    match field {
        Field::Age => "years, 0 to 100",
        Field::Bmi => "0.0 to 100.0",
        Field::Smoker => "No / Yes",
        Field::Children => "0 to 10",
        Field::Predict => "",
    }
}

pub fn draw(f: &mut Frame, state: &FormScreen) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (body, footer) = layout::vertical(area);
    let panel = layout::centered_rect(70, 80, body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border())
        .title(" Medical Insurance Premium Estimator ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Enter your details to estimate your yearly premium.",
            Theme::dim(),
        )))
        .alignment(Alignment::Center),
        rows[0],
    );

    let form = &state.form;
    for (i, field) in Field::ALL.into_iter().enumerate() {
        let focused = form.focus() == field;
        let hint = if focused && form.is_editing() {
            "enter to confirm"
        } else {
            hint(field)
        };
        let widget = match field {
            Field::Predict => widgets::predict_button(focused),
            _ => widgets::field(field.label(), form.display(field), hint, focused),
        };
        f.render_widget(widget, rows[i + 1]);
    }

    f.render_widget(widgets::result_box(form.outcome()), rows[6]);
    f.render_widget(widgets::footer(KEYS), footer);
}
