use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_core::{GameRecordInput, Ownership, Platform, RecordId};
use gamevault_lib::{RecordStore, VaultError, WriteOutcome};

use crate::CliError;
use crate::cli_types::RecordFields;

fn collection_name(ownership: Ownership) -> &'static str {
    match ownership {
        Ownership::Owned => "collection",
        Ownership::Wishlist => "wishlist",
    }
}

fn note_unsaved<T>(outcome: &WriteOutcome<T>) {
    if !outcome.is_saved() {
        log::warn!("The change applies to this run only.");
    }
}

pub(crate) fn run_add(
    store: &mut RecordStore,
    title: String,
    platform: Platform,
    wishlist: bool,
    fields: RecordFields,
) -> Result<(), CliError> {
    let mut input = GameRecordInput::new(title, platform);
    if wishlist {
        input.ownership = Ownership::Wishlist;
    }
    fields.apply(&mut input);
    let ownership = input.ownership;

    let outcome = store.add(input)?;
    note_unsaved(&outcome);
    let id = outcome.into_value();

    let title = store.get(id).map(|r| r.title.as_str()).unwrap_or_default();
    log::info!(
        "{} '{}' to your {} (id {})",
        "Added".if_supports_color(Stdout, |t| t.green()),
        title,
        collection_name(ownership),
        id
    );
    Ok(())
}

pub(crate) fn run_edit(
    store: &mut RecordStore,
    id: RecordId,
    title: Option<String>,
    platform: Option<Platform>,
    fields: RecordFields,
) -> Result<(), CliError> {
    let current = store.get(id).ok_or(VaultError::NotFound(id))?;
    let before = current.ownership;
    let mut input = current.to_input();
    if let Some(title) = title {
        input.title = title;
    }
    if let Some(platform) = platform {
        input.platform = Some(platform);
    }
    fields.apply(&mut input);
    let after = input.ownership;

    let outcome = store.update(id, input)?;
    note_unsaved(&outcome);

    let title = store.get(id).map(|r| r.title.as_str()).unwrap_or_default();
    if before != after {
        log::info!(
            "{} '{}' to your {}",
            "Moved".if_supports_color(Stdout, |t| t.green()),
            title,
            collection_name(after)
        );
    } else {
        log::info!(
            "{} '{}'",
            "Updated".if_supports_color(Stdout, |t| t.green()),
            title
        );
    }
    Ok(())
}

pub(crate) fn run_remove(store: &mut RecordStore, id: RecordId) -> Result<(), CliError> {
    let outcome = store.remove(id)?;
    note_unsaved(&outcome);
    let removed = outcome.into_value();

    log::info!(
        "{} '{}' from your {}",
        "Removed".if_supports_color(Stdout, |t| t.red()),
        removed.title,
        collection_name(removed.ownership)
    );
    Ok(())
}
