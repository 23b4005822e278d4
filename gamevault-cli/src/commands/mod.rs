pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod export;
pub(crate) mod list;
pub(crate) mod platforms;
pub(crate) mod show;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_core::GameRecord;
use gamevault_core::defaults::MAX_RATING;

fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

fn format_stars(rating: u8) -> String {
    let filled = usize::from(rating.min(MAX_RATING));
    let empty = usize::from(MAX_RATING) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

/// One-line summary used by `list`, `wishlist`, and `stats`.
fn log_record_line(record: &GameRecord) {
    let year = record
        .release_year
        .map(|y| format!(", {}", y))
        .unwrap_or_default();
    log::info!(
        "  {:>15}  {} ({}{})  {}  {}",
        record.id.if_supports_color(Stdout, |t| t.dimmed()),
        record.title.if_supports_color(Stdout, |t| t.bold()),
        record
            .platform
            .display_name()
            .if_supports_color(Stdout, |t| t.cyan()),
        year,
        format_price(record.price),
        format_stars(record.rating).if_supports_color(Stdout, |t| t.yellow()),
    );
}
