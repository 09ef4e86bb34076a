//! Application state machine and the predict → format → narrate flow.
//!
//! Single-threaded, request-per-interaction: each Enter press runs one
//! synchronous prediction attempt with no retry and no timeout. The only
//! guarded failure is the model rejecting a malformed row, which is surfaced
//! as a user-visible message; a missing artifact or a narration failure
//! propagates out of the interaction.

use std::io;
use std::path::{Path, PathBuf};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use claimsight_core::{format_amount, AppConfig, NUM_FEATURES};
use claimsight_model::ModelError;
use claimsight_speech::{narration_text, Narrator, TranslateTts};

use crate::form::ClaimForm;
use crate::ui;

/// Result of the latest prediction attempt.
#[derive(Debug)]
pub enum Outcome {
    Predicted {
        /// The assembled row, echoed back to the user.
        input_row: [f64; NUM_FEATURES],
        /// Currency-formatted prediction.
        formatted: String,
        /// Where the narration audio landed, when narration ran.
        audio_path: Option<PathBuf>,
    },
    Failed {
        message: String,
    },
}

/// Main application state.
pub struct App {
    config: AppConfig,
    form: ClaimForm,
    outcome: Option<Outcome>,
    narrator: Option<Box<dyn Narrator>>,
    should_quit: bool,
}

impl App {
    /// Build the application from configuration.
    ///
    /// # Errors
    /// Returns an error if the speech adapter cannot be constructed.
    pub fn new(config: AppConfig) -> Result<Self> {
        let narrator: Option<Box<dyn Narrator>> = if config.speech.enabled {
            Some(Box::new(TranslateTts::new(&config.speech)?))
        } else {
            None
        };
        Ok(Self::with_narrator(config, narrator))
    }

    /// Build with an injected narrator (or none).
    pub fn with_narrator(config: AppConfig, narrator: Option<Box<dyn Narrator>>) -> Self {
        Self {
            config,
            form: ClaimForm::default(),
            outcome: None,
            narrator,
            should_quit: false,
        }
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Run the main loop in the alternate screen.
    ///
    /// # Errors
    /// Returns an error if terminal operations fail or an unguarded failure
    /// (artifact load, narration) escapes a prediction.
    pub fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.form, self.outcome.as_ref()))?;

            if !event::poll(std::time::Duration::from_millis(100))? {
                continue;
            }
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        self.should_quit = true;
                    }
                    KeyCode::Tab | KeyCode::Down => self.form.next_field(),
                    KeyCode::BackTab | KeyCode::Up => self.form.prev_field(),
                    KeyCode::Left => self.form.adjust(-1),
                    KeyCode::Right => self.form.adjust(1),
                    KeyCode::Backspace => self.form.delete_char(),
                    KeyCode::Enter => self.predict()?,
                    KeyCode::Char(c) => self.form.input_char(c),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    /// One prediction attempt: assemble, predict, format, narrate.
    ///
    /// # Errors
    /// Propagates artifact-load and narration failures; a model rejection is
    /// handled and rendered instead.
    pub fn predict(&mut self) -> Result<()> {
        let features = match self.form.commit() {
            Ok(features) => features,
            Err(message) => {
                self.outcome = Some(Outcome::Failed { message });
                return Ok(());
            }
        };

        let model = claimsight_model::cached(Path::new(&self.config.model.path))?;
        let row = features.to_row();
        let result = model.predict(&features);
        self.complete_prediction(row, result)
    }

    /// Turn a prediction result into the rendered outcome, narrating on
    /// success only.
    fn complete_prediction(
        &mut self,
        input_row: [f64; NUM_FEATURES],
        result: std::result::Result<f64, ModelError>,
    ) -> Result<()> {
        match result {
            Ok(amount) => {
                let formatted = format_amount(amount);
                tracing::info!(amount, %formatted, "prediction succeeded");

                let audio_path = match &self.narrator {
                    Some(narrator) => Some(narrator.narrate(&narration_text(&formatted))?),
                    None => None,
                };
                self.outcome = Some(Outcome::Predicted {
                    input_row,
                    formatted,
                    audio_path,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "model rejected input");
                self.outcome = Some(Outcome::Failed {
                    message: e.to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use claimsight_speech::SpeechError;

    struct RecordingNarrator {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Narrator for RecordingNarrator {
        fn narrate(&self, text: &str) -> std::result::Result<PathBuf, SpeechError> {
            self.calls.lock().unwrap().push(text.to_string());
            Ok(PathBuf::from("audio/claim-test.mp3"))
        }
    }

    fn app_with_recorder() -> (App, Arc<Mutex<Vec<String>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let narrator = RecordingNarrator {
            calls: calls.clone(),
        };
        let app = App::with_narrator(AppConfig::default(), Some(Box::new(narrator)));
        (app, calls)
    }

    const ROW: [f64; NUM_FEATURES] = [30.0, 1.0, 0.0, 10_000.0, 0.0, 0.0, 3.0];

    #[test]
    fn success_formats_currency_and_narrates_once() {
        let (mut app, calls) = app_with_recorder();
        app.complete_prediction(ROW, Ok(12_345.678)).unwrap();

        match app.outcome() {
            Some(Outcome::Predicted {
                formatted,
                audio_path,
                ..
            }) => {
                assert_eq!(formatted, "₹12,345.68");
                assert!(audio_path.is_some());
            }
            other => panic!("unexpected outcome: {other:?}"),
        }

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0], "The predicted insurance claim amount is ₹12,345.68.");
    }

    #[test]
    fn rejection_renders_error_and_skips_narration() {
        let (mut app, calls) = app_with_recorder();
        let rejection = ModelError::RowShape {
            expected: 7,
            actual: 6,
        };
        app.complete_prediction(ROW, Err(rejection)).unwrap();

        match app.outcome() {
            Some(Outcome::Failed { message }) => {
                assert!(message.contains("shape mismatch"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn narration_disabled_still_predicts() {
        let mut app = App::with_narrator(AppConfig::default(), None);
        app.complete_prediction(ROW, Ok(100.0)).unwrap();
        match app.outcome() {
            Some(Outcome::Predicted { audio_path, .. }) => assert!(audio_path.is_none()),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
