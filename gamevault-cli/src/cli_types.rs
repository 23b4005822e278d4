//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use gamevault_core::{
    Condition, Edition, Format, GameRecordInput, Genre, Ownership, Platform, RecordId,
};
use gamevault_lib::{SortBy, WishlistSort};

#[derive(Parser)]
#[command(name = "gamevault")]
#[command(about = "Track your video game collection and wishlist", long_about = None)]
pub(crate) struct Cli {
    /// Directory holding the collection files (defaults to settings, then the platform data dir)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Optional record fields shared by `add` and `edit`.
#[derive(Args, Clone, Default)]
pub(crate) struct RecordFields {
    /// Release year
    #[arg(short = 'y', long)]
    pub year: Option<i32>,

    /// Genre (e.g., rpg, action, platformer)
    #[arg(short, long)]
    pub genre: Option<Genre>,

    /// Purchase date (YYYY-MM-DD)
    #[arg(long)]
    pub purchased: Option<NaiveDate>,

    /// Price paid (or expected, for wishlist items)
    #[arg(long)]
    pub price: Option<f64>,

    /// physical or digital
    #[arg(short, long)]
    pub format: Option<Format>,

    /// owned or wishlist
    #[arg(short, long)]
    pub ownership: Option<Ownership>,

    /// Edition (standard, collector, deluxe, ultimate, other)
    #[arg(short, long)]
    pub edition: Option<Edition>,

    /// Condition of a physical copy (new, used-good, used-fair, used-poor)
    #[arg(short, long)]
    pub condition: Option<Condition>,

    /// Star rating, 0 to 5
    #[arg(short, long)]
    pub rating: Option<u8>,

    /// Cover image URL
    #[arg(long)]
    pub cover: Option<String>,
}

impl RecordFields {
    /// Overwrite the fields of `input` that were given on the command line.
    pub(crate) fn apply(self, input: &mut GameRecordInput) {
        if let Some(year) = self.year {
            input.release_year = Some(year);
        }
        if let Some(genre) = self.genre {
            input.genre = Some(genre);
        }
        if let Some(date) = self.purchased {
            input.purchase_date = Some(date);
        }
        if let Some(price) = self.price {
            input.price = Some(price);
        }
        if let Some(format) = self.format {
            input.format = format;
        }
        if let Some(ownership) = self.ownership {
            input.ownership = ownership;
        }
        if let Some(edition) = self.edition {
            input.edition = Some(edition);
        }
        if let Some(condition) = self.condition {
            input.condition = Some(condition);
        }
        if let Some(rating) = self.rating {
            input.rating = Some(rating);
        }
        if let Some(cover) = self.cover {
            input.cover_image = Some(cover);
        }
    }
}

/// Search, filter, and paging arguments for `list`.
#[derive(Args, Clone)]
pub(crate) struct ListArgs {
    /// Case-insensitive text to find in titles or genres
    #[arg(short, long)]
    pub search: Option<String>,

    /// Platform codes or aliases (e.g., switch,ps,steam)
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Vec<Platform>,

    /// Genre codes (e.g., rpg,action)
    #[arg(short, long, value_delimiter = ',')]
    pub genres: Vec<Genre>,

    /// Sort order: date-added, title, release-year, price, rating
    #[arg(long, default_value = "date-added")]
    pub sort: SortBy,

    /// Page number, starting at 1
    #[arg(long, default_value = "1")]
    pub page: usize,

    /// Records per page (default from settings)
    #[arg(long)]
    pub page_size: Option<usize>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Add a game to the collection or wishlist
    Add {
        /// Game title
        title: String,

        /// Platform code or alias (e.g., switch, ps5, steam)
        #[arg(short, long)]
        platform: Platform,

        /// Add to the wishlist instead of the owned collection
        #[arg(short, long, conflicts_with = "ownership")]
        wishlist: bool,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Change fields of an existing game
    Edit {
        /// Game id (see `list`)
        id: RecordId,

        /// New title
        #[arg(short, long)]
        title: Option<String>,

        /// New platform
        #[arg(short, long)]
        platform: Option<Platform>,

        #[command(flatten)]
        fields: RecordFields,
    },

    /// Delete a game from the collection or wishlist
    Remove {
        /// Game id
        id: RecordId,
    },

    /// Show every field of one game
    Show {
        /// Game id
        id: RecordId,
    },

    /// Search and browse the owned collection
    List {
        #[command(flatten)]
        args: ListArgs,
    },

    /// Show the wishlist
    Wishlist {
        /// Sort order: date-added, title, priority, price
        #[arg(long, default_value = "date-added")]
        sort: WishlistSort,
    },

    /// Show collection statistics
    Stats,

    /// Export both collections to CSV
    Export {
        /// Output file (default: gamevault-export-<date>.csv in the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List supported platforms and their aliases
    Platforms,

    /// Inspect or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Save the data directory in the settings file (omit the path to clear it)
    SetDataDir {
        /// Directory for games.json and wishlist.json
        path: Option<PathBuf>,
    },
}
