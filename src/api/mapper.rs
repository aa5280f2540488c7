//! Conversions from domain records to response view-models.

use base64::{Engine, engine::general_purpose::STANDARD};

use super::types::{
    BaseBookViewModel, BookCoverViewModel, BookViewModel, CharacterViewModel, CoverArtFailureDto,
    CoverArtResultDto, SeedResultDto, SeriesViewModel,
};
use crate::models::book::Book;
use crate::models::character::Character;
use crate::models::fixture::SeedSummary;
use crate::models::series::Series;
use crate::services::CoverArtReport;

impl From<Book> for BookViewModel {
    fn from(book: Book) -> Self {
        Self {
            has_cover_image: book.has_cover_image(),
            id: book.id,
            ordinal: book.ordinal,
            name: book.name,
            description: book.description,
            isbn10: book.isbn10,
            isbn13: book.isbn13,
            cover_image_url: book.cover_image_url,
            series_id: book.series_id,
            series_name: book.series_name,
            characters: book.characters,
        }
    }
}

impl From<Book> for BaseBookViewModel {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            ordinal: book.ordinal,
            name: book.name,
            description: book.description,
        }
    }
}

impl From<Book> for BookCoverViewModel {
    fn from(book: Book) -> Self {
        let book_cover_image = book
            .cover_image
            .filter(|bytes| !bytes.is_empty())
            .map(|bytes| STANDARD.encode(bytes));

        Self {
            book_id: book.id,
            book_image_is_base64_string: book_cover_image.is_some(),
            book_cover_image,
        }
    }
}

impl From<Series> for SeriesViewModel {
    fn from(series: Series) -> Self {
        Self {
            id: series.id,
            name: series.name,
            books: series.books.into_iter().map(|b| b.name).collect(),
        }
    }
}

impl From<Character> for CharacterViewModel {
    fn from(character: Character) -> Self {
        Self {
            books: character.books_by_ordinal(),
            id: character.id,
            name: character.name,
        }
    }
}

impl From<SeedSummary> for SeedResultDto {
    fn from(summary: SeedSummary) -> Self {
        let total = summary.total();
        Self {
            message: format!("Seeded {total} new records"),
            series: summary.series,
            books: summary.books,
            characters: summary.characters,
            book_characters: summary.book_characters,
            total,
        }
    }
}

impl From<CoverArtReport> for CoverArtResultDto {
    fn from(report: CoverArtReport) -> Self {
        let failed = report.failures.len();
        Self {
            message: format!(
                "Updated cover art for {} of {} books",
                report.updated, report.attempted
            ),
            attempted: report.attempted,
            updated: report.updated,
            failed,
            failures: report
                .failures
                .into_iter()
                .map(|f| CoverArtFailureDto {
                    book_id: f.book_id,
                    book_name: f.book_name,
                    url: f.url,
                    error: f.error,
                })
                .collect(),
        }
    }
}

/// Maps every record, keeping order.
pub fn map_all<S, T: From<S>>(records: Vec<S>) -> Vec<T> {
    records.into_iter().map(T::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::character::CharacterAppearance;
    use crate::models::series::SeriesBook;
    use crate::services::CoverArtFailure;

    fn book(cover_image: Option<Vec<u8>>) -> Book {
        Book {
            id: 10,
            ordinal: 1,
            name: "The Final Empire".to_string(),
            description: Some("Ash falls".to_string()),
            isbn10: None,
            isbn13: Some("9780765311788".to_string()),
            cover_image_url: Some("https://example.com/10.jpg".to_string()),
            cover_image,
            series_id: 1,
            series_name: "Mistborn".to_string(),
            characters: vec!["Kelsier".to_string(), "Vin".to_string()],
        }
    }

    #[test]
    fn test_book_view_model() {
        let vm = BookViewModel::from(book(None));
        assert_eq!(vm.id, 10);
        assert_eq!(vm.ordinal, 1);
        assert_eq!(vm.name, "The Final Empire");
        assert_eq!(vm.series_name, "Mistborn");
        assert_eq!(vm.characters, vec!["Kelsier", "Vin"]);
        assert!(!vm.has_cover_image);
    }

    #[test]
    fn test_base_book_view_model_drops_detail() {
        let vm = BaseBookViewModel::from(book(Some(vec![1, 2, 3])));
        assert_eq!(vm.id, 10);
        assert_eq!(vm.description.as_deref(), Some("Ash falls"));

        let json = serde_json::to_value(&vm).unwrap();
        assert!(json.get("isbn13").is_none());
        assert!(json.get("characters").is_none());
    }

    #[test]
    fn test_book_cover_view_model() {
        let vm = BookCoverViewModel::from(book(Some(b"hello".to_vec())));
        assert_eq!(vm.book_id, 10);
        assert_eq!(vm.book_cover_image.as_deref(), Some("aGVsbG8="));
        assert!(vm.book_image_is_base64_string);

        let vm = BookCoverViewModel::from(book(None));
        assert!(vm.book_cover_image.is_none());
        assert!(!vm.book_image_is_base64_string);

        let vm = BookCoverViewModel::from(book(Some(Vec::new())));
        assert!(!vm.book_image_is_base64_string);
    }

    #[test]
    fn test_series_view_model_keeps_book_order() {
        let series = Series {
            id: 1,
            name: "Mistborn".to_string(),
            books: vec![
                SeriesBook {
                    id: 10,
                    ordinal: 1,
                    name: "The Final Empire".to_string(),
                },
                SeriesBook {
                    id: 11,
                    ordinal: 2,
                    name: "The Well of Ascension".to_string(),
                },
            ],
        };

        let vm = SeriesViewModel::from(series);
        assert_eq!(vm.books, vec!["The Final Empire", "The Well of Ascension"]);
    }

    #[test]
    fn test_character_view_model_serializes_ordinal_keys() {
        let character = Character {
            id: 3,
            name: "Vin".to_string(),
            appearances: vec![
                CharacterAppearance {
                    book_id: 10,
                    book_ordinal: 1,
                    book_name: "The Final Empire".to_string(),
                    series_id: 1,
                },
                CharacterAppearance {
                    book_id: 12,
                    book_ordinal: 3,
                    book_name: "The Hero of Ages".to_string(),
                    series_id: 1,
                },
            ],
        };

        let json = serde_json::to_value(CharacterViewModel::from(character)).unwrap();
        assert_eq!(json["name"], "Vin");
        assert_eq!(json["books"]["1"], "The Final Empire");
        assert_eq!(json["books"]["3"], "The Hero of Ages");
    }

    #[test]
    fn test_cover_art_result() {
        let report = CoverArtReport {
            attempted: 3,
            updated: 2,
            failures: vec![CoverArtFailure {
                book_id: 7,
                book_name: "Pyramids".to_string(),
                url: "https://example.com/7.jpg".to_string(),
                error: "Server responded with status 404".to_string(),
            }],
        };

        let dto = CoverArtResultDto::from(report);
        assert_eq!(dto.updated, 2);
        assert_eq!(dto.failed, 1);
        assert_eq!(dto.failures[0].book_id, 7);
        assert_eq!(dto.message, "Updated cover art for 2 of 3 books");
    }

    #[test]
    fn test_seed_result_totals() {
        let dto = SeedResultDto::from(SeedSummary {
            series: 1,
            books: 2,
            characters: 3,
            book_characters: 4,
        });
        assert_eq!(dto.total, 10);
        assert_eq!(dto.message, "Seeded 10 new records");
    }
}
