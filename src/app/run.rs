use std::{io, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use inference::InferenceAdapter;
use log::{info, warn};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::ui::screens::{
    Action, Screen,
    form::FormScreen,
    unavailable::UnavailableState,
};

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Picks the first screen, loading the model up front.
fn initial_screen(adapter: InferenceAdapter) -> Screen {
    match adapter.store().warm_up() {
        Ok(()) => {
            info!("model ready, showing the form");
            Screen::Form(FormScreen::new(adapter))
        }
        Err(e) => {
            warn!("starting without a model: {e}");
            Screen::Unavailable(UnavailableState::from_err(&e))
        }
    }
}

/// Runs the TUI application.
///
/// # Errors
/// Returns an error if terminal setup or rendering fails.
pub fn run(adapter: InferenceAdapter) -> Result<()> {
    let mut screen = initial_screen(adapter);

    let _guard = TerminalGuard::enter()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    loop {
        terminal.draw(|f| screen.draw(f))?;

        if event::poll(Duration::from_millis(120))? {
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                match screen.handle_key(k.code) {
                    Action::Quit => break,
                    Action::Transition(next) => screen = next,
                    Action::None => {}
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use inference::{ArtifactSource, ModelStore};

    use super::*;

    fn adapter_at(path: impl Into<std::path::PathBuf>) -> InferenceAdapter {
        InferenceAdapter::new(Arc::new(ModelStore::new(ArtifactSource::new(path))))
    }

    #[test]
    fn shipped_model_opens_the_form() {
        let adapter = adapter_at(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/model/insurancemodel.json"
        ));
        assert!(matches!(initial_screen(adapter), Screen::Form(_)));
    }

    #[test]
    fn missing_model_opens_the_warning() {
        let tmp = tempfile::tempdir().unwrap();
        let screen = initial_screen(adapter_at(tmp.path().join("missing.json")));

        match screen {
            Screen::Unavailable(s) => assert!(s.reason.starts_with("io error")),
            _ => panic!("expected the unavailable screen"),
        }
    }
}
