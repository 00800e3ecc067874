use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CoreError;
use crate::flavour::{FlavourZone, SEABROOK_FLAVOURS, ZoneSpec};

/// Taille maximale d'un upload accepté (50 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

/// Nombre de points de la forme d'onde affichée.
pub const DEFAULT_WAVEFORM_POINTS: usize = 100;

/// Runtime configuration. Every field has a sane default.
///
/// # Example
/// ```
/// use rb_core::config::RumbleConfig;
/// let config = RumbleConfig::default();
/// assert_eq!(config.waveform_points, 100);
/// assert_eq!(config.catalog().len(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct RumbleConfig {
    /// Points in the downsampled waveform [1, 2000].
    pub waveform_points: usize,
    /// Upper bound on accepted upload size, in bytes.
    pub max_upload_bytes: u64,
    /// Replacement catalog. `None` = built-in flavours.
    pub zones: Option<Vec<FlavourZone>>,
}

impl Default for RumbleConfig {
    fn default() -> Self {
        Self {
            waveform_points: DEFAULT_WAVEFORM_POINTS,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            zones: None,
        }
    }
}

impl RumbleConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.waveform_points = self.waveform_points.clamp(1, 2000);
        self.max_upload_bytes = self.max_upload_bytes.max(1);
    }

    /// Catalogue actif : zones de la config, sinon le catalogue intégré.
    #[must_use]
    pub fn catalog(&self) -> &[FlavourZone] {
        self.zones.as_deref().unwrap_or(&SEABROOK_FLAVOURS[..])
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    analysis: Option<AnalysisSection>,
    upload: Option<UploadSection>,
    zones: Option<Vec<ZoneSpec>>,
}

#[derive(Deserialize)]
struct AnalysisSection {
    waveform_points: Option<usize>,
}

#[derive(Deserialize)]
struct UploadSection {
    max_upload_bytes: Option<u64>,
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the TOML is malformed, or if `[[zones]]` is present but
/// empty or holds a centroid outside the grid.
///
/// # Example
/// ```
/// use rb_core::config::parse_config;
/// let config = parse_config("[analysis]\nwaveform_points = 64\n").unwrap();
/// assert_eq!(config.waveform_points, 64);
/// ```
pub fn parse_config(content: &str) -> Result<RumbleConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RumbleConfig::default();

    if let Some(a) = file.analysis
        && let Some(v) = a.waveform_points
    {
        config.waveform_points = v;
    }
    if let Some(u) = file.upload
        && let Some(v) = u.max_upload_bytes
    {
        config.max_upload_bytes = v;
    }
    if let Some(specs) = file.zones {
        if specs.is_empty() {
            return Err(CoreError::Config("[[zones]] is present but empty".into()).into());
        }
        let zones = specs
            .into_iter()
            .map(|spec| {
                let id = spec.id.clone();
                FlavourZone::try_from(spec).with_context(|| format!("zone '{id}'"))
            })
            .collect::<Result<Vec<_>>>()?;
        log::info!("Catalogue personnalisé : {} zones", zones.len());
        config.zones = Some(zones);
    }

    config.clamp_all();
    Ok(config)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use rb_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RumbleConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Config invalide : {}", path.display()))
}
