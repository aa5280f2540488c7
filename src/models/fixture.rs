use serde::Deserialize;

/// Catalog bundled with the binary and loaded by the seed operation.
///
/// Records reference each other by name so the document stays independent of
/// storage identities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub series: Vec<SeedSeries>,
    #[serde(default)]
    pub books: Vec<SeedBook>,
    #[serde(default)]
    pub characters: Vec<SeedCharacter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedSeries {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedBook {
    pub name: String,
    pub ordinal: i32,
    pub series: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub isbn10: Option<String>,
    #[serde(default)]
    pub isbn13: Option<String>,
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCharacter {
    pub name: String,
    /// Names of the books the character appears in.
    #[serde(default)]
    pub books: Vec<String>,
}

/// Rows actually inserted by one seed run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub series: u64,
    pub books: u64,
    pub characters: u64,
    pub book_characters: u64,
}

impl SeedSummary {
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.series + self.books + self.characters + self.book_characters
    }
}
