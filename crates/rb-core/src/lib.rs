/// Types, catalogue de saveurs et classification pour Rumble.
///
/// This crate holds the analysis record, the flavour grid, the nearest-zone
/// classifier and configuration loading. It performs no I/O beyond reading
/// the config file.

pub mod analysis;
pub mod classify;
pub mod config;
pub mod error;
pub mod flavour;

pub use analysis::{AudioAnalysis, GridPoint};
pub use classify::{Classification, classify, closest_flavour, nearest};
pub use config::RumbleConfig;
pub use error::CoreError;
pub use flavour::{FlavourZone, SEABROOK_FLAVOURS};
