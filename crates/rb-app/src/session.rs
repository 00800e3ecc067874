use std::fmt;
use std::path::PathBuf;

use rb_core::analysis::AudioAnalysis;
use rb_core::flavour::FlavourZone;
use serde::Serialize;
use thiserror::Error;

/// Everything the result card needs.
#[derive(Clone, Debug, Serialize)]
pub struct Outcome {
    pub analysis: AudioAnalysis,
    pub flavour: FlavourZone,
    pub waveform: Vec<f32>,
}

/// Étapes de la session : upload → processing → result | error.
#[derive(Clone, Debug, Default)]
pub enum AppState {
    /// Waiting for a file.
    #[default]
    Upload,
    /// A file was accepted and is being analysed.
    Processing { file: PathBuf },
    /// Analysis finished.
    Result(Box<Outcome>),
    /// Analysis failed; the message is shown to the user.
    Error(String),
}

impl AppState {
    fn name(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Processing { .. } => "processing",
            Self::Result(_) => "result",
            Self::Error(_) => "error",
        }
    }
}

impl fmt::Display for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A transition was requested from a state that does not allow it.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("cannot {event} while in state '{from}'")]
pub struct SessionError {
    pub from: &'static str,
    pub event: &'static str,
}

/// Machine à états de la page. Toutes les transitions passent par ici.
#[derive(Debug, Default)]
pub struct Session {
    state: AppState,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Upload → Processing.
    ///
    /// # Errors
    /// Returns [`SessionError`] unless the session is waiting for a file.
    pub fn select_file(&mut self, file: PathBuf) -> Result<(), SessionError> {
        match self.state {
            AppState::Upload => self.transition(AppState::Processing { file }),
            _ => Err(self.refuse("select a file")),
        }
    }

    /// Processing → Result.
    ///
    /// # Errors
    /// Returns [`SessionError`] unless a file is being processed.
    pub fn complete(&mut self, outcome: Outcome) -> Result<(), SessionError> {
        match self.state {
            AppState::Processing { .. } => self.transition(AppState::Result(Box::new(outcome))),
            _ => Err(self.refuse("complete")),
        }
    }

    /// Processing → Error.
    ///
    /// # Errors
    /// Returns [`SessionError`] unless a file is being processed.
    pub fn fail(&mut self, message: impl Into<String>) -> Result<(), SessionError> {
        match self.state {
            AppState::Processing { .. } => self.transition(AppState::Error(message.into())),
            _ => Err(self.refuse("fail")),
        }
    }

    /// Any state → Upload. Drops the previous outcome or error.
    pub fn reset(&mut self) {
        log::debug!("session: {} -> upload", self.state);
        self.state = AppState::Upload;
    }

    fn transition(&mut self, next: AppState) -> Result<(), SessionError> {
        log::debug!("session: {} -> {next}", self.state);
        self.state = next;
        Ok(())
    }

    fn refuse(&self, event: &'static str) -> SessionError {
        SessionError {
            from: self.state.name(),
            event,
        }
    }
}
