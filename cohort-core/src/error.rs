use std::fmt;

#[derive(Debug)]
pub enum CohortError {
    InvalidItemsPerPage(usize),
    InvalidPage(usize),
    InvalidDisplay(String),
    Parse(String),
    Json(serde_json::Error),
    Io(std::io::Error),
}

impl fmt::Display for CohortError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CohortError::InvalidItemsPerPage(n) => {
                write!(f, "Invalid items per page: {} (must be at least 1)", n)
            }
            CohortError::InvalidPage(n) => write!(f, "Invalid page number: {} (pages start at 1)", n),
            CohortError::InvalidDisplay(e) => write!(f, "Invalid display options: {}", e),
            CohortError::Parse(e) => write!(f, "Parse error: {}", e),
            CohortError::Json(e) => write!(f, "JSON parsing error: {}", e),
            CohortError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for CohortError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CohortError::Json(e) => Some(e),
            CohortError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for CohortError {
    fn from(err: serde_json::Error) -> Self {
        CohortError::Json(err)
    }
}

impl From<std::io::Error> for CohortError {
    fn from(err: std::io::Error) -> Self {
        CohortError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_messages_name_the_bad_value() {
        assert_eq!(
            CohortError::InvalidItemsPerPage(0).to_string(),
            "Invalid items per page: 0 (must be at least 1)"
        );
        assert_eq!(
            CohortError::InvalidPage(0).to_string(),
            "Invalid page number: 0 (pages start at 1)"
        );
    }

    #[test]
    fn test_wrapped_errors_keep_their_source() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = CohortError::from(json_err);
        assert!(err.to_string().starts_with("JSON parsing error"));
        assert!(err.source().is_some());
        assert!(CohortError::Parse("x".to_string()).source().is_none());
    }
}
