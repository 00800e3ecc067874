use thiserror::Error;

/// Errors originating from the analysis core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Sample buffer, sample rate or supplied duration rejected.
    #[error("Invalid audio input: {0}")]
    InvalidInput(String),

    /// The classifier was handed a catalog without any zone.
    #[error("Flavour catalog is empty")]
    EmptyCatalog,

    /// A grid coordinate fell outside [0, 1] or was not finite.
    #[error("Coordinate {axis} out of range [0, 1]: {value}")]
    CoordinateOutOfRange {
        /// "pitch" or "volume".
        axis: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Invalid configuration value or structure.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
