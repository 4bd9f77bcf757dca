//! Application state and core logic

use crate::config::TuiConfig;
use crate::model::{ArtifactError, ModelArtifacts, Predictor};
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, Form, FormButton, BUTTONS_ROW};
use crate::ui::{form_layout, Hit};
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, error};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Loaded scaler and model; absent when loading failed
    predictor: Option<Predictor>,
    /// Whether the app should quit
    quit: bool,
    /// Terminal size for mouse hit-testing (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create the app from the outcome of artifact loading
    pub fn new(artifacts: Result<ModelArtifacts, ArtifactError>) -> Self {
        match artifacts {
            Ok(artifacts) => Self::with_predictor(Some(Predictor::from_artifacts(artifacts)), None),
            Err(err) => {
                error!("Prediction disabled: {err}");
                Self::with_predictor(None, Some(err.to_string()))
            }
        }
    }

    /// Load the configured artifacts once and build the app
    pub async fn load(config: &TuiConfig) -> Self {
        Self::new(ModelArtifacts::load(config.model_path(), config.scaler_path()).await)
    }

    pub fn with_predictor(predictor: Option<Predictor>, artifact_error: Option<String>) -> Self {
        Self {
            state: AppState::new(artifact_error),
            predictor,
            quit: false,
            terminal_size: None,
        }
    }

    pub fn has_predictor(&self) -> bool {
        self.predictor.is_some()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Score the current form; a no-op when no model is loaded
    pub fn calculate(&mut self) {
        let outcome = self
            .state
            .session
            .calculate(self.predictor.as_ref())
            .map(|_| ());
        if let Err(err) = outcome {
            self.push_error(format!("Prediction failed: {err:#}"));
        }
    }

    /// Clear the form, the result and transient UI state
    pub fn reset(&mut self) {
        self.state.reset();
    }

    fn press_button(&mut self, button: FormButton) {
        match button {
            FormButton::Calculate => self.calculate(),
            FormButton::Reset => self.reset(),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.state.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &mut self.state.session.form;
        let on_buttons = form.is_buttons_row_active();

        match key.code {
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => self.quit = true,
            KeyCode::Char('e') if ctrl => self.calculate(),
            KeyCode::Char('r') if ctrl => self.reset(),
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => self.copy_result(),
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Buttons row
            KeyCode::Left | KeyCode::Right if on_buttons => form.selected_button.toggle(),
            KeyCode::Enter if on_buttons => {
                let button = form.selected_button;
                self.press_button(button);
            }
            // Field input
            KeyCode::Left => {
                if let Some(field) = form.get_active_field_mut() {
                    field.decrement();
                }
            }
            KeyCode::Right => {
                if let Some(field) = form.get_active_field_mut() {
                    field.increment();
                }
            }
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(' ')
                if form
                    .get_field(form.active_field())
                    .is_some_and(|f| f.is_choice()) =>
            {
                if let Some(field) = form.get_active_field_mut() {
                    field.increment();
                }
            }
            KeyCode::Char(c) if !ctrl => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle a mouse event: clicks focus fields or press buttons, scrolling steps fields
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<()> {
        if self.state.has_errors() {
            if matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let (height, width) = self.terminal_size.unwrap_or((24, 80));
        let layout = form_layout(
            Rect::new(0, 0, width, height),
            self.state.artifact_error.is_some(),
        );
        let Some(hit) = layout.hit(mouse.column, mouse.row) else {
            return Ok(());
        };

        let form = &mut self.state.session.form;
        match (mouse.kind, hit) {
            (MouseEventKind::Down(MouseButton::Left), Hit::Field(idx)) => {
                form.set_active_field(idx);
            }
            (MouseEventKind::Down(MouseButton::Left), Hit::Button(button)) => {
                form.set_active_field(BUTTONS_ROW);
                form.selected_button = button;
                self.press_button(button);
            }
            (MouseEventKind::ScrollUp, Hit::Field(idx)) => {
                form.set_active_field(idx);
                if let Some(field) = form.get_active_field_mut() {
                    field.increment();
                }
            }
            (MouseEventKind::ScrollDown, Hit::Field(idx)) => {
                form.set_active_field(idx);
                if let Some(field) = form.get_active_field_mut() {
                    field.decrement();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Copy the result sentence to the clipboard
    fn copy_result(&mut self) {
        let Some(message) = self.state.session.result_message() else {
            self.state.status_message = Some("Nothing to copy yet".to_string());
            return;
        };

        match self.copy_to_clipboard(&message) {
            Ok(()) => {
                debug!(session = %self.state.session.id, "Result copied to clipboard");
                self.state.status_message = Some("Copied result to clipboard".to_string());
            }
            Err(err) => {
                debug!("Clipboard unavailable: {err}");
                self.push_error(format!("Failed to copy result: {err}"));
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
