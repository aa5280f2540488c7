pub use super::book_characters::Entity as BookCharacters;
pub use super::books::Entity as Books;
pub use super::characters::Entity as Characters;
pub use super::series::Entity as Series;
