use axum::{http::StatusCode, response::IntoResponse};

pub const USAGE: &str = "\
Incorrect usage. Available routes:
  GET    /Books/Get/{id}
  GET    /Books/GetByOrdinal/{ordinal}
  GET    /Books/GetByName?bookName=<name>
  GET    /Books/Search?searchString=<text>
  GET    /Books/Series/{seriesId}
  GET    /Books/GetBookCover/{bookId}
  GET    /Series/Get/{id}
  GET    /Series/GetByName?seriesName=<name>
  GET    /Series/Search?searchString=<text>
  GET    /Characters/Get/{id}
  GET    /Characters/GetByName?characterName=<name>
  GET    /Characters/Search?searchString=<text>
  GET    /Database/SeedData
  DELETE /Database/DropData?secret=<secret>
  GET    /Database/ApplyBookCoverArt
  GET    /Version
";

pub async fn root() -> &'static str {
    USAGE
}

pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub async fn fallback() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, USAGE)
}
