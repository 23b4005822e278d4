use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_core::RecordId;
use gamevault_lib::{RecordStore, VaultError};

use crate::CliError;

use super::{format_price, format_stars};

pub(crate) fn run_show(store: &RecordStore, id: RecordId) -> Result<(), CliError> {
    let record = store.get(id).ok_or(VaultError::NotFound(id))?;

    log::info!("{}", record.title.if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    let dash = || "-".to_string();
    let condition = match record.effective_condition() {
        Some(c) => c.display_name().to_string(),
        None => "n/a (digital)".to_string(),
    };
    let fields: &[(&str, String)] = &[
        ("Id", record.id.to_string()),
        ("Platform", record.platform.display_name().to_string()),
        (
            "Release year",
            record.release_year.map_or_else(dash, |y| y.to_string()),
        ),
        (
            "Genre",
            record
                .genre
                .map_or_else(dash, |g| g.display_name().to_string()),
        ),
        (
            "Purchased",
            record.purchase_date.map_or_else(dash, |d| d.to_string()),
        ),
        ("Price", format_price(record.price)),
        ("Format", record.format.display_name().to_string()),
        ("Ownership", record.ownership.display_name().to_string()),
        ("Edition", record.edition.display_name().to_string()),
        ("Condition", condition),
        ("Rating", format_stars(record.rating)),
        ("Cover", record.cover_url().to_string()),
        (
            "Added",
            record.added_date.format("%Y-%m-%d %H:%M UTC").to_string(),
        ),
    ];

    for (name, value) in fields {
        log::info!(
            "  {:<13} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.dimmed()),
            value
        );
    }
    Ok(())
}
