mod campus;
mod config;
mod gui;
mod logging;
mod menu;
mod routing;

use std::io;
use std::process::ExitCode;

use log::{error, info, warn};
use thiserror::Error;

use crate::{
    campus::{DatasetError, load_campus},
    config::{AppConfig, CONFIG_FILE},
    gui::EguiRenderer,
    menu::{MenuController, MenuError},
};

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Menu(#[from] MenuError),
}

fn run(config: AppConfig) -> Result<(), AppError> {
    let campus = load_campus()?;
    info!(
        "[main] Campus loaded: {} landmarks, {} walkways",
        campus.node_count(),
        campus.edge_count()
    );

    let stdin = io::stdin();
    let renderer = EguiRenderer::new(config.render);
    MenuController::new(&campus, stdin.lock(), io::stdout(), renderer).run()?;
    Ok(())
}

fn main() -> ExitCode {
    let (config, config_error) = AppConfig::load_or_default(CONFIG_FILE);
    if let Err(e) = logging::init_logging(&config.log) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    if let Some(e) = config_error {
        warn!("[main] Ignoring {}: {}", CONFIG_FILE, e);
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("[main] {}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
