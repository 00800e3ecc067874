use anyhow::Result;
use clap::Parser;

use crate::session::{AppState, Session};

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod session;
pub mod upload;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis les overrides CLI
    let mut config = resolve_config(&cli)?;
    if let Some(points) = cli.points {
        config.waveform_points = points;
        config.clamp_all();
    }

    // 4. Une session, un fichier à la fois
    let mut session = Session::new();
    let mut failures = 0usize;
    for file in &cli.files {
        if !run_one(&mut session, file, &config, cli.json)? {
            failures += 1;
        }
        session.reset();
    }

    if failures > 0 {
        anyhow::bail!("{failures}/{} fichier(s) en échec", cli.files.len());
    }
    Ok(())
}

/// upload -> processing -> result | error, then render. `Ok(false)` on analysis failure.
fn run_one(
    session: &mut Session,
    file: &std::path::Path,
    config: &rb_core::config::RumbleConfig,
    json: bool,
) -> Result<bool> {
    session.select_file(file.to_path_buf())?;

    match pipeline::analyse_upload(file, config) {
        Ok(outcome) => session.complete(outcome)?,
        Err(e) => {
            log::error!("Audio analysis failed: {e:#}");
            session.fail(format!("{e:#}"))?;
        }
    }

    match session.state() {
        AppState::Result(outcome) => {
            if json {
                println!("{}", report::render_json(outcome)?);
            } else {
                print!("{}", report::render_card(outcome));
            }
            Ok(true)
        }
        AppState::Error(message) => {
            eprintln!("{}: {message}", file.display());
            Ok(false)
        }
        other => anyhow::bail!("Session terminée dans un état inattendu : {other}"),
    }
}

/// Load `--config` if it exists, defaults otherwise.
fn resolve_config(cli: &cli::Cli) -> Result<rb_core::config::RumbleConfig> {
    if cli.config.exists() {
        rb_core::config::load_config(&cli.config)
    } else {
        log::warn!(
            "Config introuvable : {}. Utilisation des défauts.",
            cli.config.display()
        );
        Ok(rb_core::config::RumbleConfig::default())
    }
}
