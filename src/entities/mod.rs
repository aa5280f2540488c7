pub mod prelude;

pub mod book_characters;
pub mod books;
pub mod characters;
pub mod series;
