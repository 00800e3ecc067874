use std::path::{Path, PathBuf};

use thiserror::Error;

/// Why an upload was refused before decoding.
#[derive(Error, Debug)]
pub enum UploadError {
    /// Media type does not start with `audio/`.
    #[error("Please upload a valid audio file (got {media_type})")]
    NotAudio { media_type: &'static str },

    /// File exceeds the configured size limit.
    #[error("File size must be less than {}MB ({size} bytes)", .limit / (1024 * 1024))]
    TooLarge { size: u64, limit: u64 },

    /// Metadata could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A file that passed the upload checks.
#[derive(Clone, Debug)]
pub struct Upload {
    pub path: PathBuf,
    pub media_type: &'static str,
    pub size: u64,
}

impl Upload {
    /// Extension en minuscules, utilisée comme indice pour le probe.
    #[must_use]
    pub fn extension(&self) -> Option<String> {
        self.path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
    }
}

/// Media type a browser would report for this file name.
#[must_use]
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "wav" | "wave" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "aac" => "audio/aac",
        "ogg" | "oga" => "audio/ogg",
        "opus" => "audio/opus",
        "flac" => "audio/flac",
        "weba" => "audio/webm",
        "aif" | "aiff" => "audio/aiff",
        "caf" => "audio/x-caf",
        "mp4" | "m4v" => "video/mp4",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Check media type and size of `path` before it is decoded.
///
/// # Errors
/// - [`UploadError::NotAudio`] for a non-audio media type.
/// - [`UploadError::TooLarge`] when the file is over `max_bytes`.
/// - [`UploadError::Io`] if the file metadata cannot be read.
pub fn validate_upload(path: &Path, max_bytes: u64) -> Result<Upload, UploadError> {
    let media_type = media_type_for(path);
    if !media_type.starts_with("audio/") {
        return Err(UploadError::NotAudio { media_type });
    }

    let size = std::fs::metadata(path)
        .map_err(|source| UploadError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > max_bytes {
        return Err(UploadError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    log::debug!("upload ok: {} ({media_type}, {size} bytes)", path.display());
    Ok(Upload {
        path: path.to_path_buf(),
        media_type,
        size,
    })
}
