use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Résultat de l'analyse d'un clip. Créé une fois, jamais modifié.
///
/// Serialized with camelCase field names so the JSON output keeps the
/// `averageVolume` / `pitchCoordinate` shape front ends already consume.
///
/// # Example
/// ```
/// use rb_core::analysis::AudioAnalysis;
/// let a = AudioAnalysis {
///     average_volume: 0.0,
///     dominant_pitch: 0.0,
///     duration: 0.125,
///     pitch_coordinate: 0.0,
///     volume_coordinate: 0.05,
/// };
/// assert!(a.point().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioAnalysis {
    /// Raw RMS amplitude. Not capped.
    pub average_volume: f64,
    /// Zero-crossing frequency estimate in Hz.
    pub dominant_pitch: f64,
    /// Clip length in seconds.
    pub duration: f64,
    /// Log-scaled pitch in [0, 1].
    pub pitch_coordinate: f64,
    /// Scaled loudness in [0.05, 1].
    pub volume_coordinate: f64,
}

impl AudioAnalysis {
    /// Position of this clip on the flavour grid.
    ///
    /// # Errors
    /// Returns [`CoreError::CoordinateOutOfRange`] if either coordinate escaped [0, 1].
    pub fn point(&self) -> Result<GridPoint, CoreError> {
        GridPoint::new(self.pitch_coordinate, self.volume_coordinate)
    }
}

/// A validated position in the [0, 1] × [0, 1] coordinate space.
///
/// `x` is the pitch axis (low to high), `y` the volume axis (quiet to loud).
///
/// # Example
/// ```
/// use rb_core::analysis::GridPoint;
/// assert!(GridPoint::new(0.5, 0.5).is_ok());
/// assert!(GridPoint::new(1.2, 0.5).is_err());
/// assert!(GridPoint::new(0.5, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GridPoint {
    x: f64,
    y: f64,
}

impl GridPoint {
    /// Valide et construit un point.
    ///
    /// # Errors
    /// Returns [`CoreError::CoordinateOutOfRange`] for values outside [0, 1] or NaN.
    pub fn new(pitch: f64, volume: f64) -> Result<Self, CoreError> {
        Ok(Self {
            x: check_unit("pitch", pitch)?,
            y: check_unit("volume", volume)?,
        })
    }

    /// Constructor for compile-time catalog entries. Values are not checked.
    #[must_use]
    pub(crate) const fn new_unchecked(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Pitch coordinate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Volume coordinate.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance between two grid points.
    ///
    /// # Example
    /// ```
    /// use rb_core::analysis::GridPoint;
    /// let a = GridPoint::new(0.0, 0.0).unwrap();
    /// let b = GridPoint::new(0.3, 0.4).unwrap();
    /// assert!((a.distance(&b) - 0.5).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn distance(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

fn check_unit(axis: &'static str, value: f64) -> Result<f64, CoreError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(CoreError::CoordinateOutOfRange { axis, value })
    }
}
