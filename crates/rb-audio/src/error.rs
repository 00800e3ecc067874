use thiserror::Error;

/// Errors originating from the audio module.
#[derive(Error, Debug)]
pub enum AudioError {
    /// The container could not be probed or carries no audio track.
    #[error("Unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// Codec setup failed or the stream yielded no samples.
    #[error("Decode error: {0}")]
    DecodeError(String),
}
