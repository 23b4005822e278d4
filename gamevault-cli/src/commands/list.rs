use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_lib::{FilterSpec, RecordStore, WishlistSort, query, sort_wishlist};

use crate::cli_types::ListArgs;

use super::log_record_line;

pub(crate) fn run_list(store: &RecordStore, args: ListArgs, default_page_size: usize) {
    let mut spec = FilterSpec::new()
        .with_platforms(args.platforms)
        .with_genres(args.genres)
        .with_sort(args.sort);
    if let Some(search) = args.search {
        spec = spec.with_search(search);
    }
    let page_size = args.page_size.unwrap_or(default_page_size);

    let page = query(store.owned(), &spec, args.page, page_size);

    log::info!(
        "{} ({} of {} games, sorted by {})",
        "Collection".if_supports_color(Stdout, |t| t.bold()),
        page.total_matches,
        store.owned().len(),
        spec.sort_by.code(),
    );
    crate::log_blank();

    if page.records.is_empty() {
        if spec.is_empty() {
            log::info!("No games yet. Add one with `gamevault add <title> --platform <platform>`.");
        } else {
            log::info!("No games match these filters.");
        }
        return;
    }

    for record in &page.records {
        log_record_line(record);
    }

    crate::log_blank();
    log::info!(
        "Page {} of {}",
        page.page.if_supports_color(Stdout, |t| t.bold()),
        page.total_pages
    );
    if page.page < page.total_pages {
        log::info!(
            "{}",
            format!("Next: --page {}", page.page + 1).if_supports_color(Stdout, |t| t.dimmed())
        );
    }
}

pub(crate) fn run_wishlist(store: &RecordStore, sort: WishlistSort) {
    let records = sort_wishlist(store.wishlist(), sort);

    log::info!(
        "{} ({} games, sorted by {})",
        "Wishlist".if_supports_color(Stdout, |t| t.bold()),
        records.len(),
        sort.code(),
    );
    crate::log_blank();

    if records.is_empty() {
        log::info!("Your wishlist is empty. Add with `gamevault add <title> --platform <platform> --wishlist`.");
        return;
    }
    for record in records {
        log_record_line(record);
    }
}
