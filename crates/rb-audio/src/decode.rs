use std::fs::File;
use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSource, MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::error::AudioError;

/// A decoded clip: first channel only, native sample rate.
#[derive(Clone, Debug)]
pub struct DecodedClip {
    /// Amplitudes in [-1, 1].
    pub samples: Vec<f32>,
    /// Samples per second.
    pub sample_rate: u32,
    /// `samples.len() / sample_rate`, in seconds.
    pub duration: f64,
}

/// Decode an audio file into the samples of its first channel.
///
/// Supports WAV, MP3, FLAC, OGG, AAC/M4A via symphonia.
///
/// # Errors
/// Returns an error if the file cannot be opened, probed or decoded, or if it
/// yields no samples.
///
/// # Example
/// ```no_run
/// use rb_audio::decode::decode_file;
/// let clip = decode_file("rumble.wav").unwrap();
/// println!("{} samples @ {}Hz", clip.samples.len(), clip.sample_rate);
/// ```
pub fn decode_file(path: impl AsRef<Path>) -> Result<DecodedClip> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Cannot open audio file: {}", path.display()))?;
    let ext = path.extension().and_then(|e| e.to_str());
    let clip = decode_source(Box::new(file), ext)?;
    log::info!(
        "Decoded {} samples @ {}Hz ({:.3}s) from {}",
        clip.samples.len(),
        clip.sample_rate,
        clip.duration,
        path.display()
    );
    Ok(clip)
}

/// Decode an in-memory upload. `extension` is a probe hint such as `"mp3"`.
///
/// # Errors
/// Same as [`decode_file`].
pub fn decode_bytes(bytes: Vec<u8>, extension: Option<&str>) -> Result<DecodedClip> {
    let len = bytes.len();
    let clip = decode_source(Box::new(Cursor::new(bytes)), extension)?;
    log::info!(
        "Decoded {} samples @ {}Hz ({:.3}s) from {len} bytes",
        clip.samples.len(),
        clip.sample_rate,
        clip.duration
    );
    Ok(clip)
}

fn decode_source(source: Box<dyn MediaSource>, extension: Option<&str>) -> Result<DecodedClip> {
    let mss = MediaSourceStream::new(source, MediaSourceStreamOptions::default());

    let mut hint = Hint::new();
    if let Some(ext) = extension {
        hint.with_extension(ext);
    }

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| AudioError::UnsupportedFormat(e.to_string()))?;

    let mut format = probed.format;
    let track = format
        .default_track()
        .ok_or_else(|| AudioError::UnsupportedFormat("no default audio track".into()))?;

    let mut sample_rate = track.codec_params.sample_rate;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| AudioError::DecodeError(e.to_string()))?;

    let track_id = track.id;
    let mut samples: Vec<f32> = Vec::new();
    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut max_sample_frames: usize = 0;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(ref e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                log::warn!("Audio decode packet error: {e}");
                break;
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                log::warn!("Audio decode frame error: {e}");
                continue;
            }
        };

        let spec = *decoded.spec();
        if sample_rate.is_none() {
            sample_rate = Some(spec.rate);
        }
        let channels = spec.channels.count().max(1);
        let num_frames = decoded.capacity();
        // Reuse SampleBuffer: only reallocate if this packet is bigger than current capacity
        if sample_buf.is_none() || num_frames > max_sample_frames {
            sample_buf = Some(SampleBuffer::<f32>::new(num_frames as u64, spec));
            max_sample_frames = num_frames;
        }
        let Some(buf) = sample_buf.as_mut() else {
            continue;
        };
        buf.copy_interleaved_ref(decoded);

        // Canal 0 uniquement, pas de downmix
        samples.extend(buf.samples().iter().step_by(channels));
    }

    let sample_rate = sample_rate
        .filter(|&r| r > 0)
        .ok_or_else(|| AudioError::DecodeError("unknown sample rate".into()))?;
    if samples.is_empty() {
        return Err(AudioError::DecodeError("stream contains no samples".into()).into());
    }

    let duration = samples.len() as f64 / f64::from(sample_rate);
    Ok(DecodedClip {
        samples,
        sample_rate,
        duration,
    })
}
