/// Réduit un clip à `target_points` amplitudes moyennes pour l'affichage.
///
/// Samples are split into `target_points` contiguous blocks of
/// `samples.len() / target_points` samples; each point is the mean absolute
/// amplitude of its block. Trailing samples past the last full block are
/// dropped. A clip shorter than `target_points` yields all-zero points.
///
/// # Example
/// ```
/// use rb_audio::waveform::downsample;
/// let points = downsample(&[0.5, -0.5, 1.0, -1.0, 0.25], 2);
/// assert_eq!(points, vec![0.5, 1.0]);
/// ```
#[must_use]
pub fn downsample(samples: &[f32], target_points: usize) -> Vec<f32> {
    if target_points == 0 {
        return Vec::new();
    }
    let block_size = samples.len() / target_points;
    if block_size == 0 {
        log::debug!(
            "waveform: {} samples < {target_points} points",
            samples.len()
        );
        return vec![0.0; target_points];
    }
    samples
        .chunks_exact(block_size)
        .take(target_points)
        .map(|block| block.iter().map(|s| s.abs()).sum::<f32>() / block_size as f32)
        .collect()
}
