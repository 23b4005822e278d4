//! gamevault CLI
//!
//! Command-line interface for tracking a video game collection and wishlist.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use gamevault_lib::settings::{self, Settings};
use gamevault_lib::{FileBlobStore, RecordStore};

use cli_types::{Cli, Commands, ConfigAction};
pub(crate) use error::CliError;

/// Print an empty line through the logger so `--quiet` and `--logfile`
/// apply to it as well.
pub(crate) fn log_blank() {
    log::info!("");
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose, cli.quiet, cli.logfile.as_deref()) {
        eprintln!("{}", e);
        std::process::exit(2);
    }

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings();
    let data_dir = settings::resolve_data_dir(cli.data_dir, &settings);

    // Config commands don't touch the collections
    let command = match cli.command {
        Commands::Config { action } => {
            return match action {
                ConfigAction::Show => commands::config::run_config_show(&settings, &data_dir),
                ConfigAction::Path => commands::config::run_config_path(),
                ConfigAction::SetDataDir { path } => {
                    commands::config::run_config_set_data_dir(path.as_deref())
                }
            };
        }
        Commands::Platforms => {
            commands::platforms::run_platforms();
            return Ok(());
        }
        other => other,
    };

    let mut store = open_store(&settings, &data_dir);

    match command {
        Commands::Add {
            title,
            platform,
            wishlist,
            fields,
        } => commands::edit::run_add(&mut store, title, platform, wishlist, fields),
        Commands::Edit {
            id,
            title,
            platform,
            fields,
        } => commands::edit::run_edit(&mut store, id, title, platform, fields),
        Commands::Remove { id } => commands::edit::run_remove(&mut store, id),
        Commands::Show { id } => commands::show::run_show(&store, id),
        Commands::List { args } => {
            commands::list::run_list(&store, args, settings.collection.page_size);
            Ok(())
        }
        Commands::Wishlist { sort } => {
            commands::list::run_wishlist(&store, sort);
            Ok(())
        }
        Commands::Stats => {
            commands::stats::run_stats(&store);
            Ok(())
        }
        Commands::Export { output } => commands::export::run_export(&store, output),
        Commands::Config { .. } | Commands::Platforms => Ok(()),
    }
}

fn open_store(settings: &Settings, data_dir: &std::path::Path) -> RecordStore {
    log::debug!("Using data directory {}", data_dir.display());
    let mut store = RecordStore::open(Box::new(FileBlobStore::new(data_dir)));

    if settings.collection.seed_sample_data {
        if let Some(outcome) = store.seed_if_empty(gamevault_lib::sample::sample_collection()) {
            log::info!(
                "New collection: added {} sample games. Remove them with `gamevault remove <id>`.",
                outcome.value
            );
            log_blank();
        }
    }
    store
}
