//! The first-run sample collection.

use chrono::NaiveDate;
use gamevault_core::{
    parse_timestamp, Condition, Edition, Format, GameRecord, Genre, Ownership, Platform,
};

struct Sample {
    id: u64,
    title: &'static str,
    platform: Platform,
    year: i32,
    genre: Genre,
    purchased: Option<&'static str>,
    price: f64,
    format: Format,
    ownership: Ownership,
    edition: Edition,
    condition: Condition,
    rating: u8,
    cover: &'static str,
    added: &'static str,
}

const SAMPLES: &[Sample] = &[
    Sample {
        id: 1,
        title: "The Legend of Zelda: Breath of the Wild",
        platform: Platform::Switch,
        year: 2017,
        genre: Genre::Adventure,
        purchased: Some("2023-05-15"),
        price: 59.99,
        format: Format::Physical,
        ownership: Ownership::Owned,
        edition: Edition::Standard,
        condition: Condition::New,
        rating: 5,
        cover: "https://upload.wikimedia.org/wikipedia/en/c/c6/The_Legend_of_Zelda_Breath_of_the_Wild.jpg",
        added: "2023-05-15",
    },
    Sample {
        id: 2,
        title: "God of War Ragnarök",
        platform: Platform::Playstation,
        year: 2022,
        genre: Genre::Action,
        purchased: Some("2022-11-10"),
        price: 69.99,
        format: Format::Physical,
        ownership: Ownership::Owned,
        edition: Edition::Standard,
        condition: Condition::UsedGood,
        rating: 5,
        cover: "https://upload.wikimedia.org/wikipedia/en/e/ee/God_of_War_Ragnar%C3%B6k_cover.jpg",
        added: "2022-11-10",
    },
    Sample {
        id: 3,
        title: "Halo Infinite",
        platform: Platform::Xbox,
        year: 2021,
        genre: Genre::Shooter,
        purchased: Some("2021-12-08"),
        price: 59.99,
        format: Format::Digital,
        ownership: Ownership::Owned,
        edition: Edition::Standard,
        condition: Condition::New,
        rating: 4,
        cover: "https://upload.wikimedia.org/wikipedia/en/1/14/Halo_Infinite.png",
        added: "2021-12-08",
    },
    Sample {
        id: 4,
        title: "Elden Ring",
        platform: Platform::PcSteam,
        year: 2022,
        genre: Genre::Rpg,
        purchased: Some("2022-02-25"),
        price: 59.99,
        format: Format::Digital,
        ownership: Ownership::Owned,
        edition: Edition::Deluxe,
        condition: Condition::New,
        rating: 5,
        cover: "https://upload.wikimedia.org/wikipedia/en/b/b9/Elden_Ring_Box_art.jpg",
        added: "2022-02-25",
    },
    Sample {
        id: 5,
        title: "Super Mario Odyssey",
        platform: Platform::Switch,
        year: 2017,
        genre: Genre::Adventure,
        purchased: Some("2020-03-10"),
        price: 49.99,
        format: Format::Physical,
        ownership: Ownership::Owned,
        edition: Edition::Standard,
        condition: Condition::UsedGood,
        rating: 5,
        cover: "https://upload.wikimedia.org/wikipedia/en/8/8d/Super_Mario_Odyssey.jpg",
        added: "2020-03-10",
    },
    Sample {
        id: 6,
        title: "Cyberpunk 2077",
        platform: Platform::PcGog,
        year: 2020,
        genre: Genre::Rpg,
        purchased: Some("2021-06-20"),
        price: 39.99,
        format: Format::Digital,
        ownership: Ownership::Owned,
        edition: Edition::Standard,
        condition: Condition::New,
        rating: 3,
        cover: "https://upload.wikimedia.org/wikipedia/en/9/9f/Cyberpunk_2077_box_art.jpg",
        added: "2021-06-20",
    },
    Sample {
        id: 7,
        title: "Starfield",
        platform: Platform::PcSteam,
        year: 2023,
        genre: Genre::Rpg,
        purchased: None,
        price: 69.99,
        format: Format::Digital,
        ownership: Ownership::Wishlist,
        edition: Edition::Standard,
        condition: Condition::New,
        rating: 0,
        cover: "https://upload.wikimedia.org/wikipedia/en/thumb/3/3a/Starfield_steam_header.jpg/2560px-Starfield_steam_header.jpg",
        added: "2023-07-01",
    },
    Sample {
        id: 8,
        title: "Final Fantasy XVI",
        platform: Platform::Playstation,
        year: 2023,
        genre: Genre::Rpg,
        purchased: None,
        price: 69.99,
        format: Format::Physical,
        ownership: Ownership::Wishlist,
        edition: Edition::Collector,
        condition: Condition::New,
        rating: 0,
        cover: "https://upload.wikimedia.org/wikipedia/en/thumb/d/d3/Final_Fantasy_XVI_cover_art.jpg/2560px-Final_Fantasy_XVI_cover_art.jpg",
        added: "2023-06-22",
    },
];

/// Six owned games and two wishlist entries, ids 1 through 8.
pub fn sample_collection() -> Vec<GameRecord> {
    SAMPLES
        .iter()
        .map(|s| GameRecord {
            id: s.id,
            title: s.title.to_string(),
            platform: s.platform,
            release_year: Some(s.year),
            genre: Some(s.genre),
            purchase_date: s.purchased.and_then(|d| d.parse::<NaiveDate>().ok()),
            price: s.price,
            format: s.format,
            ownership: s.ownership,
            edition: s.edition,
            condition: s.condition,
            rating: s.rating,
            cover_image: Some(s.cover.to_string()),
            added_date: parse_timestamp(s.added).unwrap_or_default(),
        })
        .collect()
}
