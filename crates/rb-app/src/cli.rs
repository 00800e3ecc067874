use std::path::PathBuf;

use clap::Parser;

/// Rumble — upload a stomach rumble, get a crisp flavour.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Fichiers audio à analyser (WAV, MP3, M4A, OGG, FLAC…), un à la fois.
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Nombre de points de la forme d'onde (remplace la config).
    #[arg(long)]
    pub points: Option<usize>,

    /// Sortie JSON au lieu de la carte texte.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
