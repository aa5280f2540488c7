pub mod book;
pub mod character;
pub mod fixture;
pub mod series;
