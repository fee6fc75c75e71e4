//! Upload-directory image access
//!
//! Post rows store only a filename; the bytes live in a configured
//! upload directory. Reads are blocking and unbounded, matching the
//! read-and-encode contract of the post read path.

use crate::errors::{io_error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem store for post images
#[derive(Debug, Clone)]
pub struct ImageStore {
    upload_dir: PathBuf,
}

impl ImageStore {
    /// Create an image store rooted at the given upload directory
    pub fn new<P: Into<PathBuf>>(upload_dir: P) -> Self {
        Self {
            upload_dir: upload_dir.into(),
        }
    }

    /// Upload directory this store resolves filenames against
    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    /// Full path for an image filename
    pub fn path_for(&self, filename: &str) -> PathBuf {
        self.upload_dir.join(filename)
    }

    /// Read an image file and return its bytes base64-encoded
    ///
    /// No existence or content-type validation happens before the read;
    /// a missing file surfaces as an Io error.
    pub fn read_encoded(&self, filename: &str) -> Result<String> {
        let path = self.path_for(filename);
        let bytes = fs::read(&path).map_err(|e| io_error("read_image", e))?;
        Ok(STANDARD.encode(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_encoded_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let bytes: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a];
        std::fs::write(dir.path().join("logo.png"), bytes).unwrap();

        let store = ImageStore::new(dir.path());
        let encoded = store.read_encoded("logo.png").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path());

        let err = store.read_encoded("absent.png").unwrap_err();
        assert_eq!(err.code(), "ERR_IO");
    }
}
