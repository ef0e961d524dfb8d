//! Passthrough for files kept up to date by other programs (weather scripts)

use crate::error::Result;
use crate::utils::file::{read_token, CACHE_TOKEN_LEN};
use std::path::Path;

/// First whitespace-delimited token of `path`; fails when missing or empty
pub fn fetch_file<P: AsRef<Path>>(path: P) -> Result<String> {
    read_token(path, CACHE_TOKEN_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_fetch_file_token() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".weather");
        fs::write(&path, "^fg(yellow)+21°C^fg()\n").unwrap();
        assert_eq!(fetch_file(&path).unwrap(), "^fg(yellow)+21°C^fg()");
    }

    #[test]
    fn test_fetch_file_caps_token_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".weather");
        fs::write(&path, "x".repeat(100)).unwrap();
        assert_eq!(fetch_file(&path).unwrap().len(), CACHE_TOKEN_LEN);
    }

    #[test]
    fn test_fetch_file_missing_or_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".weather");
        assert!(fetch_file(&path).is_err());

        fs::write(&path, "\n").unwrap();
        assert!(fetch_file(&path).is_err());
    }
}
