use super::ApiError;

/// Rejects a missing, empty or whitespace-only name and returns it trimmed.
pub fn validate_name<'a>(field: &str, name: Option<&'a str>) -> Result<&'a str, ApiError> {
    let trimmed = name.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ApiError::validation(format!("{field} is required")));
    }
    Ok(trimmed)
}

pub fn validate_search_query(query: Option<&str>) -> Result<&str, ApiError> {
    let trimmed = query.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(ApiError::validation("searchString is required"));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name("bookName", Some("Mort")).unwrap(), "Mort");
        assert_eq!(validate_name("bookName", Some("  Eric ")).unwrap(), "Eric");
        assert!(validate_name("bookName", Some("")).is_err());
        assert!(validate_name("bookName", Some("   ")).is_err());
        assert!(validate_name("bookName", None).is_err());
    }

    #[test]
    fn test_validate_search_query() {
        assert!(validate_search_query(Some("Witch")).is_ok());
        assert_eq!(validate_search_query(Some("  trimmed  ")).unwrap(), "trimmed");
        assert!(validate_search_query(Some("")).is_err());
        assert!(validate_search_query(Some("   ")).is_err());
        assert!(validate_search_query(None).is_err());
    }
}
