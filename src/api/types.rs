use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookViewModel {
    pub id: i32,
    pub ordinal: i32,
    pub name: String,
    pub description: Option<String>,
    pub isbn10: Option<String>,
    pub isbn13: Option<String>,
    pub cover_image_url: Option<String>,
    pub has_cover_image: bool,
    pub series_id: i32,
    pub series_name: String,
    pub characters: Vec<String>,
}

/// Book summary used for series listings.
#[derive(Debug, Clone, Serialize)]
pub struct BaseBookViewModel {
    pub id: i32,
    pub ordinal: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BookCoverViewModel {
    pub book_id: i32,
    /// Base64 of the stored image bytes.
    pub book_cover_image: Option<String>,
    pub book_image_is_base64_string: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesViewModel {
    pub id: i32,
    pub name: String,
    pub books: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterViewModel {
    pub id: i32,
    pub name: String,
    /// Book ordinal to book name.
    pub books: BTreeMap<i32, String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageDto {
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeedResultDto {
    pub message: String,
    pub series: u64,
    pub books: u64,
    pub characters: u64,
    pub book_characters: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverArtFailureDto {
    pub book_id: i32,
    pub book_name: String,
    pub url: String,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverArtResultDto {
    pub message: String,
    pub attempted: usize,
    pub updated: u64,
    pub failed: usize,
    pub failures: Vec<CoverArtFailureDto>,
}
