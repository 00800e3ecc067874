use std::path::Path;

use anyhow::{Context, Result};
use rb_audio::decode::decode_bytes;
use rb_audio::features::extract_features_with_duration;
use rb_audio::waveform::downsample;
use rb_core::classify::classify;
use rb_core::config::RumbleConfig;

use crate::session::Outcome;
use crate::upload::validate_upload;

/// Validate, decode, analyse and classify one file.
///
/// # Errors
/// Returns an error if the upload is refused, decoding fails, or the decoded
/// clip cannot be analysed or classified against the configured catalog.
pub fn analyse_upload(path: &Path, config: &RumbleConfig) -> Result<Outcome> {
    let upload = validate_upload(path, config.max_upload_bytes)?;
    log::info!(
        "Analyse de {} ({}, {} octets)",
        upload.path.display(),
        upload.media_type,
        upload.size
    );

    let bytes = std::fs::read(&upload.path)
        .with_context(|| format!("Cannot read {}", upload.path.display()))?;
    let clip = decode_bytes(bytes, upload.extension().as_deref())?;
    let analysis = extract_features_with_duration(&clip.samples, clip.sample_rate, clip.duration)
        .context("Feature extraction failed")?;
    let flavour = classify(
        analysis.pitch_coordinate,
        analysis.volume_coordinate,
        config.catalog(),
    )
    .context("Classification failed")?
    .clone();
    let waveform = downsample(&clip.samples, config.waveform_points);

    log::info!(
        "{}: volume {:.3} pitch {:.1}Hz -> {}",
        upload.path.display(),
        analysis.average_volume,
        analysis.dominant_pitch,
        flavour.id
    );

    Ok(Outcome {
        analysis,
        flavour,
        waveform,
    })
}
