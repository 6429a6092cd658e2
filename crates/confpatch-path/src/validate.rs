//! Validation functions for config paths.

use crate::PathError;

/// Maximum allowed path depth.
const MAX_PATH_DEPTH: usize = 256;

/// Validate a parsed path.
///
/// # Errors
///
/// Returns an error if:
/// - The path is empty or contains an empty segment
/// - The path exceeds the maximum depth (256 segments)
///
/// # Example
///
/// ```
/// use confpatch_path::validate_path;
///
/// validate_path(&["foo".to_string(), "bar".to_string()]).unwrap();
/// validate_path(&[]).unwrap_err();
/// validate_path(&(0..300).map(|i| i.to_string()).collect::<Vec<_>>()).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), PathError> {
    if path.is_empty() {
        return Err(PathError::EmptyPath);
    }
    if path.len() > MAX_PATH_DEPTH {
        return Err(PathError::PathTooLong);
    }
    if path.iter().any(|s| s.is_empty()) {
        return Err(PathError::EmptyStep);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_short_path() {
        let path = vec!["foo".to_string(), "bar".to_string()];
        assert!(validate_path(&path).is_ok());
    }

    #[test]
    fn test_validate_empty_path() {
        assert_eq!(validate_path(&[]), Err(PathError::EmptyPath));
    }

    #[test]
    fn test_validate_empty_step() {
        let path = vec!["foo".to_string(), "".to_string()];
        assert_eq!(validate_path(&path), Err(PathError::EmptyStep));
    }

    #[test]
    fn test_validate_long_path() {
        let path: Vec<String> = (0..300).map(|i| i.to_string()).collect();
        assert_eq!(validate_path(&path), Err(PathError::PathTooLong));
    }

    #[test]
    fn test_validate_max_depth_path() {
        let path: Vec<String> = (0..256).map(|i| i.to_string()).collect();
        assert!(validate_path(&path).is_ok());
    }
}
