//! Unit tests for tag index error types

#[cfg(test)]
mod tests {
    use crate::index::error::IndexError;
    use std::error::Error;

    #[test]
    fn test_not_found_error() {
        let error = IndexError::NotFound("abc-123".to_string());
        assert_eq!(
            error.to_string(),
            "No tag entry with id [abc-123] found in the index"
        );
    }

    #[test]
    fn test_multiple_ids_error() {
        let error = IndexError::MultipleIds("abc-123".to_string());
        assert_eq!(
            error.to_string(),
            "Multiple tag entries found for id [abc-123]"
        );
    }

    #[test]
    fn test_incomplete_error_display() {
        let error = IndexError::Incomplete {
            id: "abc".to_string(),
            name: String::new(),
            path: "/a.txt".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("abc"));
        assert!(display.contains("missing either name"));
        assert!(display.contains("/a.txt"));
    }

    #[test]
    fn test_invalid_input_error() {
        let error = IndexError::InvalidInput("empty expression".to_string());
        assert_eq!(error.to_string(), "Invalid input: empty expression");
    }

    #[test]
    fn test_error_debug() {
        let error = IndexError::NotFound("x".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
    }

    #[test]
    fn test_lookup_errors_have_no_source() {
        assert!(IndexError::NotFound("x".to_string()).source().is_none());
        assert!(IndexError::MultipleIds("x".to_string()).source().is_none());
    }

    #[test]
    fn test_not_found_error_creation() {
        let id = "missing-id";
        let error = IndexError::NotFound(id.to_string());

        match error {
            IndexError::NotFound(got) => assert_eq!(got, id),
            _ => panic!("Expected NotFound variant"),
        }
    }
}
