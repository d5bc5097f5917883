//! Loading the default-named ignore files from the repository root.
//!
//! Reads go through a caller-supplied capability, keeping this crate
//! independent of how repository files are actually accessed.

use crate::ignore_file::{DEFAULT_IGNORE_FILE, Ignores};
use crate::rc_config::{DEFAULT_RC_FILE, TalismanRc};
use std::io;
use tracing::debug;

/// Load and parse `.talismanignore` through `repo_file_read`.
///
/// # Panics
///
/// Panics when the file cannot be read: a scan cannot proceed without
/// knowing the configured exemptions.
pub fn read_ignores_from_file<F>(repo_file_read: F) -> Ignores
where
    F: FnOnce(&str) -> io::Result<Vec<u8>>,
{
    match repo_file_read(DEFAULT_IGNORE_FILE) {
        Ok(bytes) => {
            debug!("Loaded {DEFAULT_IGNORE_FILE} ({} bytes)", bytes.len());
            Ignores::from_content(&String::from_utf8_lossy(&bytes))
        }
        Err(err) => panic!("Unable to read {DEFAULT_IGNORE_FILE}: {err}"),
    }
}

/// Load and parse `.talismanrc` through `repo_file_read`.
///
/// Decode failures degrade to the empty config (see
/// [`TalismanRc::from_bytes`]); read failures do not.
///
/// # Panics
///
/// Panics when the file cannot be read.
pub fn read_config_from_rc_file<F>(repo_file_read: F) -> TalismanRc
where
    F: FnOnce(&str) -> io::Result<Vec<u8>>,
{
    match repo_file_read(DEFAULT_RC_FILE) {
        Ok(bytes) => {
            debug!("Loaded {DEFAULT_RC_FILE} ({} bytes)", bytes.len());
            TalismanRc::from_bytes(&bytes)
        }
        Err(err) => panic!("Unable to read {DEFAULT_RC_FILE}: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_read_ignores_requests_the_default_file() {
        let ignores = read_ignores_from_file(|name| {
            assert_eq!(name, ".talismanignore");
            Ok(b"foo.txt\nbar.txt #ignore:filecontent\n".to_vec())
        });

        let patterns: Vec<&str> = ignores.patterns().collect();
        assert_eq!(patterns, ["foo.txt", "bar.txt"]);
    }

    #[test]
    #[should_panic(expected = "Unable to read .talismanignore")]
    fn test_read_ignores_panics_on_read_failure() {
        read_ignores_from_file(|_| Err(Error::new(ErrorKind::NotFound, "no such file")));
    }

    #[test]
    fn test_read_rc_requests_the_default_file() {
        let rc = read_config_from_rc_file(|name| {
            assert_eq!(name, ".talismanrc");
            Ok(b"fileignoreconfig:\n  - filename: a.txt\n".to_vec())
        });

        assert_eq!(rc.effective_rules("filecontent"), ["a.txt"]);
    }

    #[test]
    fn test_read_rc_empty_file_accepts_all() {
        let rc = read_config_from_rc_file(|_| Ok(Vec::new()));
        assert!(rc.is_empty());
        assert!(rc.accepts_all());
    }

    #[test]
    #[should_panic(expected = "Unable to read .talismanrc")]
    fn test_read_rc_panics_on_read_failure() {
        read_config_from_rc_file(|_| Err(Error::new(ErrorKind::PermissionDenied, "denied")));
    }
}
