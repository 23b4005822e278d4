use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_lib::{ExportError, RecordStore, export_file_name, write_csv};

use crate::CliError;

pub(crate) fn run_export(store: &RecordStore, output: Option<PathBuf>) -> Result<(), CliError> {
    let rows = store.export_rows();
    // Refuse before creating an empty file
    if rows.is_empty() {
        return Err(ExportError::NothingToExport.into());
    }

    let path = output.unwrap_or_else(|| {
        PathBuf::from(export_file_name(chrono::Local::now().date_naive()))
    });
    let file = File::create(&path)
        .map_err(|e| CliError::other(format!("Cannot create {}: {}", path.display(), e)))?;
    write_csv(&rows, BufWriter::new(file))?;

    log::info!(
        "{} {} games to {}",
        "Exported".if_supports_color(Stdout, |t| t.green()),
        rows.len(),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}
