use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_lib::RecordStore;

use super::{format_price, log_record_line};

const BAR_WIDTH: usize = 30;

fn bar(count: usize, max: usize) -> String {
    let len = if max == 0 {
        0
    } else {
        (count * BAR_WIDTH).div_ceil(max)
    };
    "█".repeat(len)
}

pub(crate) fn run_stats(store: &RecordStore) {
    let stats = store.summarize();

    log::info!(
        "{}",
        "Collection Statistics".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    log::info!("  Games owned:       {:>10}", stats.total_owned);
    log::info!("  Wishlist:          {:>10}", stats.wishlist_count);
    log::info!(
        "  Collection value:  {:>10}",
        format_price(stats.collection_value)
    );
    log::info!("  Top platform:      {:>10}", stats.top_platform_label());

    if !stats.recent_games.is_empty() {
        crate::log_blank();
        log::info!("{}", "Recently added".if_supports_color(Stdout, |t| t.bold()));
        for record in &stats.recent_games {
            log_record_line(record);
        }
    }

    if !stats.platform_counts.is_empty() {
        crate::log_blank();
        log::info!("{}", "By platform".if_supports_color(Stdout, |t| t.bold()));
        let max = stats.platform_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
        for (platform, count) in &stats.platform_counts {
            log::info!(
                "  {:<16} {:>4} {}",
                platform.display_name(),
                count,
                bar(*count, max).if_supports_color(Stdout, |t| t.cyan()),
            );
        }
    }

    if !stats.genre_counts.is_empty() {
        crate::log_blank();
        log::info!("{}", "By genre".if_supports_color(Stdout, |t| t.bold()));
        let max = stats.genre_counts.iter().map(|(_, n)| *n).max().unwrap_or(0);
        for (genre, count) in &stats.genre_counts {
            log::info!(
                "  {:<16} {:>4} {}",
                genre.display_name(),
                count,
                bar(*count, max).if_supports_color(Stdout, |t| t.magenta()),
            );
        }
    }
}
