use crossterm::event::KeyCode;
use inference::InferenceErr;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::{format::UNAVAILABLE_TITLE, layout, theme::Theme, widgets};

use super::Action;

const KEYS: &[(&str, &str)] = &[("q / esc", "quit")];

/// Shown instead of the form when there is no model to predict with.
pub struct UnavailableState {
    pub reason: String,
}

impl UnavailableState {
    pub fn from_err(err: &InferenceErr) -> Self {
        let reason = match err {
            InferenceErr::ModelUnavailable { reason } => reason.clone(),
            other => other.to_string(),
        };
        Self { reason }
    }
}

pub fn handle_key(_state: &mut UnavailableState, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc | KeyCode::Enter => Action::Quit,
        _ => Action::None,
    }
}

pub fn draw(f: &mut Frame, state: &UnavailableState) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let (body, footer) = layout::vertical(area);
    let panel = layout::centered_rect(60, 40, body);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::warn())
        .title(" Medical Insurance Premium Estimator ")
        .title_alignment(Alignment::Center)
        .title_style(Theme::title());
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(UNAVAILABLE_TITLE, Theme::warn())).alignment(Alignment::Center),
        rows[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(state.reason.as_str(), Theme::dim())))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows[1],
    );
    f.render_widget(widgets::footer(KEYS), footer);
}
