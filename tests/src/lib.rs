//! Helpers for tests that run real files through the tools and compare against known-good output.

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Locates a file relative to this crate, so tests find their inputs no matter which crate in the
/// workspace they run from. Fails if the file doesn't exist.
pub fn get_test_file_path(path: String) -> Result<String> {
    let candidate = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&path);
    if candidate.is_file() {
        Ok(candidate.display().to_string())
    } else {
        bail!("Couldn't find test file {}", path)
    }
}

/// Returns true if `actual` matches the contents of the goldenfile. Otherwise prints a diff and
/// returns false.
pub fn compare_with_goldenfile(actual: String, goldenfile_path: String) -> Result<bool> {
    let expected = fs_err::read_to_string(&goldenfile_path)?;
    if actual == expected {
        return Ok(true);
    }
    println!("Contents differ from {}:", goldenfile_path);
    println!("{}", prettydiff::diff_lines(&expected, &actual));
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_test_file_path() {
        assert!(get_test_file_path(String::from("input/mixed_placemarks.kml")).is_ok());
        assert!(get_test_file_path(String::from("goldenfiles/mixed_placemarks.txt")).is_ok());
        assert!(get_test_file_path(String::from("does_not_exist")).is_err());
        // Directories aren't files
        assert!(get_test_file_path(String::from("input")).is_err());
    }

    #[test]
    fn test_compare_with_goldenfile() {
        let path = get_test_file_path(String::from("goldenfiles/three_placemarks.txt")).unwrap();
        assert!(compare_with_goldenfile("[2.0, 1.0], // A\n".to_string(), path.clone()).unwrap());
        assert!(!compare_with_goldenfile("[1.0, 2.0], // A\n".to_string(), path).unwrap());
    }
}
