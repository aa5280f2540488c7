pub mod catalog_error;
pub use catalog_error::CatalogError;

pub mod book_service;
pub use book_service::BookService;

pub mod series_service;
pub use series_service::SeriesService;

pub mod character_service;
pub use character_service::CharacterService;

pub mod catalog_service_impl;
pub use catalog_service_impl::{SeaOrmBookService, SeaOrmCharacterService, SeaOrmSeriesService};

pub mod cover_art;
pub use cover_art::{CoverArtError, CoverArtFetcher, HttpCoverArtFetcher};

pub mod database_service;
pub use database_service::{CoverArtFailure, CoverArtReport, DatabaseError, DatabaseService};

pub mod database_service_impl;
pub use database_service_impl::SeaOrmDatabaseService;

pub mod fixtures;
