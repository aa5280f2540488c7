use serde::{Deserialize, Serialize};

/// A book with its series and cast already joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: i32,
    pub ordinal: i32,
    pub name: String,
    pub description: Option<String>,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    pub cover_image_url: Option<String>,
    #[serde(skip)]
    pub cover_image: Option<Vec<u8>>,
    pub series_id: i32,
    pub series_name: String,
    /// Names of the characters appearing in the book, alphabetical.
    pub characters: Vec<String>,
}

impl Book {
    #[must_use]
    pub const fn has_cover_image(&self) -> bool {
        self.cover_image.is_some()
    }
}

/// A book still waiting for its cover bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCover {
    pub book_id: i32,
    pub book_name: String,
    pub cover_image_url: String,
}
