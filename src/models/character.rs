use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: i32,
    pub name: String,
    /// Ordered by series id, then ordinal.
    pub appearances: Vec<CharacterAppearance>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterAppearance {
    pub book_id: i32,
    pub book_ordinal: i32,
    pub book_name: String,
    pub series_id: i32,
}

impl Character {
    /// Maps each linked book's ordinal to its name.
    ///
    /// Ordinals only repeat across series; the first appearance in
    /// (series, ordinal) order keeps the key.
    #[must_use]
    pub fn books_by_ordinal(&self) -> BTreeMap<i32, String> {
        let mut books = BTreeMap::new();
        for appearance in &self.appearances {
            match books.entry(appearance.book_ordinal) {
                Entry::Vacant(slot) => {
                    slot.insert(appearance.book_name.clone());
                }
                Entry::Occupied(existing) => {
                    warn!(
                        character = %self.name,
                        ordinal = appearance.book_ordinal,
                        kept = %existing.get(),
                        dropped = %appearance.book_name,
                        "Duplicate book ordinal for character"
                    );
                }
            }
        }
        books
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn appearance(book_id: i32, ordinal: i32, name: &str, series_id: i32) -> CharacterAppearance {
        CharacterAppearance {
            book_id,
            book_ordinal: ordinal,
            book_name: name.to_string(),
            series_id,
        }
    }

    #[test]
    fn test_books_by_ordinal() {
        let character = Character {
            id: 7,
            name: "Rincewind".to_string(),
            appearances: vec![
                appearance(1, 1, "The Colour of Magic", 1),
                appearance(3, 3, "Sourcery", 1),
            ],
        };

        let books = character.books_by_ordinal();
        assert_eq!(books.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(books[&1], "The Colour of Magic");
        assert_eq!(books[&3], "Sourcery");
    }

    #[test]
    fn test_books_by_ordinal_keeps_first_on_collision() {
        let character = Character {
            id: 7,
            name: "Death".to_string(),
            appearances: vec![
                appearance(1, 1, "Mort", 1),
                appearance(9, 1, "Reaper Man", 2),
            ],
        };

        let books = character.books_by_ordinal();
        assert_eq!(books.len(), 1);
        assert_eq!(books[&1], "Mort");
    }

    #[test]
    fn test_books_by_ordinal_without_appearances() {
        let character = Character {
            id: 1,
            name: "Nobody".to_string(),
            appearances: Vec::new(),
        };
        assert!(character.books_by_ordinal().is_empty());
    }
}
