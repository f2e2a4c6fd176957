use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    state::form::Outcome,
    ui::{format, theme::Theme},
};

/// One labelled input row of the form.
pub fn field<'a>(label: &'a str, value: String, hint: &'a str, focused: bool) -> Paragraph<'a> {
    let (marker, label_style, value_style) = if focused {
        ("▶ ", Theme::title(), Theme::highlight())
    } else {
        ("  ", Theme::dim(), Theme::text())
    };

    Paragraph::new(Line::from(vec![
        Span::styled(marker, label_style),
        Span::styled(format!("{label:<20}"), label_style),
        Span::styled(format!(" {value} "), value_style),
        Span::styled(format!("  {hint}"), Theme::muted()),
    ]))
}

pub fn predict_button(focused: bool) -> Paragraph<'static> {
    let style = if focused { Theme::highlight() } else { Theme::ok() };

    Paragraph::new(Span::styled("[ Predict Premium ]", style)).alignment(Alignment::Center)
}

/// The box under the form holding the last outcome, if any.
pub fn result_box(outcome: Option<&Outcome>) -> Paragraph<'static> {
    let (line, border) = match outcome {
        None => (
            Line::from(Span::styled(
                "Fill in the details and press Predict Premium.",
                Theme::muted(),
            )),
            Theme::border(),
        ),
        Some(Outcome::Premium(p)) => (
            Line::from(Span::styled(format::premium_line(*p), Theme::ok())),
            Theme::border_focus(),
        ),
        Some(Outcome::Failed(cause)) => (
            Line::from(Span::styled(format::failure_line(cause), Theme::error())),
            Theme::error(),
        ),
    };

    Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(" Result ")
                .title_style(Theme::title()),
        )
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Key bindings line at the bottom of the screen.
pub fn footer(keys: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(keys.len() * 2 + 1);
    for (key, what) in keys {
        spans.push(Span::styled(*key, Theme::dim()));
        spans.push(Span::styled(format!("  {what}    "), Theme::muted()));
    }
    spans.push(Span::styled("Estimates only, not a quote.", Theme::muted()));

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
