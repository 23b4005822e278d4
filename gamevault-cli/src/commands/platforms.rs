use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamevault_core::{Genre, Platform};

pub(crate) fn run_platforms() {
    log::info!("Supported platforms:");
    crate::log_blank();

    for platform in Platform::all() {
        log::info!(
            "  {} [{}]",
            platform.code().if_supports_color(Stdout, |t| t.bold()),
            platform
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        let extra: Vec<&str> = platform.aliases().iter().skip(1).copied().collect();
        if !extra.is_empty() {
            log::info!("    Aliases: {}", extra.join(", "));
        }
    }

    crate::log_blank();
    let genres: Vec<&str> = Genre::all().iter().map(|g| g.code()).collect();
    log::info!("Genres: {}", genres.join(", "));
}
