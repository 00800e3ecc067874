// Audio decoding, feature extraction and waveform reduction for Rumble.

pub mod decode;
pub mod error;
pub mod features;
pub mod waveform;

pub use decode::{DecodedClip, decode_bytes, decode_file};
pub use error::AudioError;
pub use features::{extract_features, extract_features_with_duration};
pub use waveform::downsample;
