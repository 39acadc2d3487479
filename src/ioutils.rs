use std::path::Path;

use crate::error::{Error, Result};

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

/// Writes `content` to `dest_path`, creating missing parent directories.
pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_file_creates_missing_parents() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("a").join("b").join("file.txt");

        write_file("content", &target).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "content");
    }

    #[test]
    fn write_file_replaces_existing_content() {
        let root = TempDir::new().unwrap();
        let target = root.path().join("file.txt");

        write_file("old", &target).unwrap();
        write_file("new", &target).unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new");
    }
}
