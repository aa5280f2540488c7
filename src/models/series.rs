use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Series {
    pub id: i32,
    pub name: String,
    /// Books in release order.
    pub books: Vec<SeriesBook>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesBook {
    pub id: i32,
    pub ordinal: i32,
    pub name: String,
}
