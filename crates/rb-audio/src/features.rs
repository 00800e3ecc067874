use rb_core::analysis::AudioAnalysis;
use rb_core::error::CoreError;

/// Bornes de la normalisation log du pitch, en Hz.
pub const PITCH_MIN_HZ: f64 = 50.0;
pub const PITCH_MAX_HZ: f64 = 1000.0;

/// RMS is multiplied by this before capping at 1.0.
pub const VOLUME_GAIN: f64 = 4.0;
/// Floor of the volume coordinate, so a silent clip still plots.
pub const VOLUME_FLOOR: f64 = 0.05;

/// Extract loudness, pitch and grid coordinates from a mono clip.
///
/// Duration is derived as `samples.len() / sample_rate`.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if `samples` is empty or `sample_rate` is 0.
///
/// # Example
/// ```
/// use rb_audio::features::extract_features;
///
/// let samples = vec![0.0f32; 1000];
/// let a = extract_features(&samples, 8000).unwrap();
/// assert_eq!(a.average_volume, 0.0);
/// assert_eq!(a.dominant_pitch, 0.0);
/// assert_eq!(a.duration, 0.125);
/// assert_eq!(a.pitch_coordinate, 0.0);
/// assert_eq!(a.volume_coordinate, 0.05);
/// ```
pub fn extract_features(samples: &[f32], sample_rate: u32) -> Result<AudioAnalysis, CoreError> {
    validate(samples, sample_rate)?;
    let duration = samples.len() as f64 / f64::from(sample_rate);
    Ok(analyse(samples, sample_rate, duration))
}

/// Same as [`extract_features`], with the duration reported by the decoder.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] for empty samples, a zero rate, or a
/// duration that is not finite and positive.
pub fn extract_features_with_duration(
    samples: &[f32],
    sample_rate: u32,
    duration: f64,
) -> Result<AudioAnalysis, CoreError> {
    validate(samples, sample_rate)?;
    if !(duration.is_finite() && duration > 0.0) {
        return Err(CoreError::InvalidInput(format!(
            "duration must be positive, got {duration}"
        )));
    }
    Ok(analyse(samples, sample_rate, duration))
}

fn validate(samples: &[f32], sample_rate: u32) -> Result<(), CoreError> {
    if samples.is_empty() {
        return Err(CoreError::InvalidInput("no samples".into()));
    }
    if sample_rate == 0 {
        return Err(CoreError::InvalidInput("sample rate must be positive".into()));
    }
    Ok(())
}

fn analyse(samples: &[f32], sample_rate: u32, duration: f64) -> AudioAnalysis {
    let average_volume = rms(samples);
    let dominant_pitch = zero_crossing_pitch(samples, sample_rate);
    let analysis = AudioAnalysis {
        average_volume,
        dominant_pitch,
        duration,
        pitch_coordinate: normalize_pitch(dominant_pitch),
        volume_coordinate: normalize_volume(average_volume),
    };
    log::debug!(
        "rms={:.4} pitch={:.1}Hz -> ({:.3}, {:.3})",
        analysis.average_volume,
        analysis.dominant_pitch,
        analysis.pitch_coordinate,
        analysis.volume_coordinate
    );
    analysis
}

/// Root-mean-square amplitude. Returns 0.0 for an empty slice.
///
/// # Example
/// ```
/// use rb_audio::features::rms;
/// assert!((rms(&[0.5, -0.5, 0.5, -0.5]) - 0.5).abs() < 1e-12);
/// ```
#[must_use]
pub fn rms(samples: &[f32]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let sum_sq: f64 = samples
        .iter()
        .map(|&s| {
            let s = f64::from(s);
            s * s
        })
        .sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Number of sign changes between consecutive samples. Zero counts as positive.
///
/// # Example
/// ```
/// use rb_audio::features::zero_crossings;
/// assert_eq!(zero_crossings(&[1.0, -1.0, 0.0, -0.5]), 3);
/// assert_eq!(zero_crossings(&[0.0, 0.3, 0.0]), 0);
/// ```
#[must_use]
pub fn zero_crossings(samples: &[f32]) -> usize {
    samples
        .windows(2)
        .filter(|w| (w[0] >= 0.0) != (w[1] >= 0.0))
        .count()
}

/// Zero-crossing frequency estimate: `crossings * rate / (2 * N)`.
///
/// Crude by construction. Harmonics and noise inflate it.
#[must_use]
pub fn zero_crossing_pitch(samples: &[f32], sample_rate: u32) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    let crossings = zero_crossings(samples) as f64;
    crossings * f64::from(sample_rate) / (2.0 * samples.len() as f64)
}

/// `max(min(rms * 4, 1), 0.05)`.
///
/// # Example
/// ```
/// use rb_audio::features::normalize_volume;
/// assert_eq!(normalize_volume(0.0), 0.05);
/// assert_eq!(normalize_volume(0.1), 0.4);
/// assert_eq!(normalize_volume(0.9), 1.0);
/// ```
#[must_use]
pub fn normalize_volume(rms: f64) -> f64 {
    (rms * VOLUME_GAIN).clamp(VOLUME_FLOOR, 1.0)
}

/// Log-scale `frequency` from [50, 1000] Hz onto [0, 1], clamping outside.
///
/// # Example
/// ```
/// use rb_audio::features::normalize_pitch;
/// assert_eq!(normalize_pitch(50.0), 0.0);
/// assert_eq!(normalize_pitch(1000.0), 1.0);
/// assert_eq!(normalize_pitch(0.0), 0.0);
/// assert_eq!(normalize_pitch(4000.0), 1.0);
/// ```
#[must_use]
pub fn normalize_pitch(frequency: f64) -> f64 {
    let clamped = frequency.clamp(PITCH_MIN_HZ, PITCH_MAX_HZ);
    let log_min = PITCH_MIN_HZ.ln();
    let log_max = PITCH_MAX_HZ.ln();
    (clamped.ln() - log_min) / (log_max - log_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square_wave(n: usize) -> Vec<f32> {
        (0..n).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect()
    }

    fn sine(freq: f64, sample_rate: u32, n: usize, amp: f64) -> Vec<f32> {
        (0..n)
            .map(|i| {
                let t = i as f64 / f64::from(sample_rate);
                (amp * (2.0 * std::f64::consts::PI * freq * t).sin()) as f32
            })
            .collect()
    }

    #[test]
    fn silent_clip_end_to_end() -> Result<(), CoreError> {
        let a = extract_features(&[0.0; 1000], 8000)?;
        assert_eq!(
            a,
            AudioAnalysis {
                average_volume: 0.0,
                dominant_pitch: 0.0,
                duration: 0.125,
                pitch_coordinate: 0.0,
                volume_coordinate: 0.05,
            }
        );
        let zone = rb_core::classify::closest_flavour(a.pitch_coordinate, a.volume_coordinate)?;
        assert_eq!(zone.id, "sea-salted");
        Ok(())
    }

    #[test]
    fn square_wave_hits_nyquist() -> Result<(), CoreError> {
        let n = 4410;
        let samples = square_wave(n);
        assert_eq!(zero_crossings(&samples), n - 1);
        let a = extract_features(&samples, 44100)?;
        let expected = (n - 1) as f64 * 44100.0 / (2.0 * n as f64);
        assert!((a.dominant_pitch - expected).abs() < 1e-9);
        assert!((a.dominant_pitch - 22050.0).abs() < 10.0);
        assert!((a.average_volume - 1.0).abs() < 1e-12);
        assert_eq!(a.volume_coordinate, 1.0);
        assert_eq!(a.pitch_coordinate, 1.0);
        Ok(())
    }

    #[test]
    fn sine_pitch_is_close() -> Result<(), CoreError> {
        // 1 s of 220 Hz: 439 crossings, the 440th falls on t = 1 s
        let samples = sine(220.0, 8000, 8000, 0.1);
        let a = extract_features(&samples, 8000)?;
        assert!((a.dominant_pitch - 220.0).abs() < 1.0, "{}", a.dominant_pitch);
        // rms of a 0.1 sine is ~0.0707
        assert!((a.average_volume - 0.1 / 2f64.sqrt()).abs() < 1e-3);
        assert!((a.volume_coordinate - 0.2828).abs() < 1e-2);
        Ok(())
    }

    #[test]
    fn zero_counts_as_non_negative() {
        assert_eq!(zero_crossings(&[0.0, -0.0, 0.0]), 0);
        assert_eq!(zero_crossings(&[-0.1, 0.0]), 1);
        assert_eq!(zero_crossings(&[0.5]), 0);
        assert_eq!(zero_crossings(&[]), 0);
    }

    #[test]
    fn pitch_coordinate_bounds() {
        assert_eq!(normalize_pitch(PITCH_MIN_HZ), 0.0);
        assert_eq!(normalize_pitch(PITCH_MAX_HZ), 1.0);
        assert_eq!(normalize_pitch(10.0), normalize_pitch(PITCH_MIN_HZ));
        assert_eq!(normalize_pitch(1e6), normalize_pitch(PITCH_MAX_HZ));
        // geometric midpoint
        let mid = (PITCH_MIN_HZ * PITCH_MAX_HZ).sqrt();
        assert!((normalize_pitch(mid) - 0.5).abs() < 1e-12);
        assert!((normalize_pitch(224.0) - 0.5).abs() < 1e-3);
    }

    #[test]
    fn pitch_coordinate_is_monotonic() {
        let mut prev = normalize_pitch(0.0);
        for hz in (0..2000).step_by(7) {
            let p = normalize_pitch(f64::from(hz));
            assert!((0.0..=1.0).contains(&p));
            assert!(p >= prev, "non monotone à {hz} Hz");
            prev = p;
        }
    }

    #[test]
    fn volume_coordinate_range() {
        for i in 0..=100 {
            let v = normalize_volume(f64::from(i) / 50.0);
            assert!((VOLUME_FLOOR..=1.0).contains(&v));
        }
        assert!((normalize_volume(0.125) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn explicit_duration_is_kept() -> Result<(), CoreError> {
        let a = extract_features_with_duration(&[0.1; 10], 8000, 2.5)?;
        assert_eq!(a.duration, 2.5);
        Ok(())
    }

    #[test]
    fn invalid_input_is_rejected() {
        assert!(matches!(
            extract_features(&[], 44100),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            extract_features(&[0.1, 0.2], 0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            extract_features_with_duration(&[0.1], 8000, 0.0),
            Err(CoreError::InvalidInput(_))
        ));
        assert!(matches!(
            extract_features_with_duration(&[0.1], 8000, f64::NAN),
            Err(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn coordinates_always_classifiable() -> Result<(), CoreError> {
        for (freq, amp) in [(30.0, 0.01), (120.0, 0.3), (600.0, 0.9), (3000.0, 1.0)] {
            let a = extract_features(&sine(freq, 16000, 4000, amp), 16000)?;
            assert!(a.average_volume >= 0.0);
            a.point()?;
        }
        Ok(())
    }
}
