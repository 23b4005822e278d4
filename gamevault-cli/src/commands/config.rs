use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_lib::settings::{self, Settings};

use crate::CliError;

/// Show the settings file, the effective data directory, and every setting.
pub(crate) fn run_config_show(settings: &Settings, data_dir: &Path) -> Result<(), CliError> {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "GameVault Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!(
        "  Data directory: {}",
        data_dir.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    crate::log_blank();

    let text = settings
        .to_pretty()
        .map_err(|e| CliError::config(format!("Cannot format settings: {}", e)))?;
    for line in text.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings::settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_data_dir(dir: Option<&Path>) -> Result<(), CliError> {
    settings::save_data_dir(dir)?;
    match dir {
        Some(d) => log::info!(
            "Data directory set to {}",
            d.display().if_supports_color(Stdout, |t| t.cyan())
        ),
        None => log::info!("Data directory cleared; using {}", settings::default_data_dir().display()),
    }
    Ok(())
}
