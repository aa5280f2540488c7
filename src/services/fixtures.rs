//! Seed data bundled into the binary.

use anyhow::Context;
use rust_embed::RustEmbed;

use crate::models::fixture::SeedData;

#[derive(RustEmbed)]
#[folder = "fixtures/"]
struct Fixtures;

pub const SEED_FILE: &str = "seed.json";

pub fn load_seed_data() -> anyhow::Result<SeedData> {
    let file = Fixtures::get(SEED_FILE)
        .with_context(|| format!("Bundled fixture '{SEED_FILE}' is missing"))?;

    parse_seed_data(&file.data)
}

pub fn parse_seed_data(bytes: &[u8]) -> anyhow::Result<SeedData> {
    serde_json::from_slice(bytes).context("Failed to parse seed fixture")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_seed_is_consistent() {
        let data = load_seed_data().unwrap();
        assert!(!data.series.is_empty());
        assert!(!data.books.is_empty());
        assert!(!data.characters.is_empty());

        let book_names: std::collections::HashSet<&str> =
            data.books.iter().map(|b| b.name.as_str()).collect();
        for character in &data.characters {
            for book in &character.books {
                assert!(
                    book_names.contains(book.as_str()),
                    "{} links unknown book {}",
                    character.name,
                    book
                );
            }
        }

        let mut ordinals = std::collections::HashSet::new();
        for book in &data.books {
            assert!(
                ordinals.insert((book.series.as_str(), book.ordinal)),
                "duplicate ordinal {} in {}",
                book.ordinal,
                book.series
            );
        }
    }

    #[test]
    fn test_parse_seed_data_defaults() {
        let data = parse_seed_data(br#"{"series": [{"name": "Witches"}]}"#).unwrap();
        assert_eq!(data.series.len(), 1);
        assert!(data.books.is_empty());
        assert!(data.characters.is_empty());
    }

    #[test]
    fn test_parse_seed_data_rejects_garbage() {
        assert!(parse_seed_data(b"not json").is_err());
    }
}
