//! Storage key derivation.
//!
//! Clients choose the name their upload is stored under. The name is kept as-is
//! except that leading directory components are dropped, so `reports/q1.txt` is
//! stored as `q1.txt`. Names that try to leave the storage directory are rejected.

use std::path::{Component, Path};

use crate::{StorageError, StorageResult};

/// Turn a client-supplied filename into a flat storage key.
///
/// Rejected: absolute paths (a leading `/` or `\`, or a drive prefix on Windows), any
/// `..` segment, NUL bytes, and names whose final component is empty or `.`.
pub fn key_for_filename(filename: &str) -> StorageResult<String> {
    if filename.contains('\0') {
        return Err(StorageError::InvalidKey(
            "filename contains a NUL byte".to_string(),
        ));
    }

    if filename.starts_with('/') || filename.starts_with('\\') || is_rooted(filename) {
        return Err(StorageError::InvalidKey(
            "absolute paths are not allowed".to_string(),
        ));
    }

    let segments: Vec<&str> = filename.split(['/', '\\']).collect();
    if segments.iter().any(|segment| *segment == "..") {
        return Err(StorageError::InvalidKey(
            "path traversal is not allowed".to_string(),
        ));
    }

    match segments.last() {
        Some(name) if !name.is_empty() && *name != "." => Ok(name.to_string()),
        _ => Err(StorageError::InvalidKey(format!(
            "'{}' does not name a file",
            filename
        ))),
    }
}

/// Check that `key` is a single path component that stays inside the storage directory.
pub(crate) fn validate_key(key: &str) -> StorageResult<()> {
    let mut components = Path::new(key).components();
    let single_normal = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    if !single_normal || key.contains(['/', '\\', '\0']) {
        return Err(StorageError::InvalidKey(
            "Storage key contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

/// Root or drive prefix as the host platform understands it.
fn is_rooted(name: &str) -> bool {
    Path::new(name)
        .components()
        .any(|c| matches!(c, Component::RootDir | Component::Prefix(_)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_names_are_kept_verbatim() {
        assert_eq!(key_for_filename("report.txt").unwrap(), "report.txt");
        assert_eq!(key_for_filename("my report (1).txt").unwrap(), "my report (1).txt");
        assert_eq!(key_for_filename(".env").unwrap(), ".env");
        assert_eq!(key_for_filename("a..b.txt").unwrap(), "a..b.txt");
    }

    #[test]
    fn directory_components_are_stripped() {
        assert_eq!(key_for_filename("dir/report.txt").unwrap(), "report.txt");
        assert_eq!(key_for_filename("C\\Users\\me\\x.bin").unwrap(), "x.bin");
        assert_eq!(key_for_filename("./report.txt").unwrap(), "report.txt");
    }

    #[test]
    fn traversal_is_rejected() {
        for name in ["..", "../x", "a/../../b", "..\\x", "a/.."] {
            assert!(
                matches!(key_for_filename(name), Err(StorageError::InvalidKey(_))),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn absolute_paths_are_rejected() {
        for name in ["/etc/passwd", "\\windows\\x", "//server/share/x"] {
            assert!(
                matches!(key_for_filename(name), Err(StorageError::InvalidKey(_))),
                "{name} should be rejected"
            );
        }
    }

    #[cfg(windows)]
    #[test]
    fn drive_prefixes_are_rejected() {
        for name in ["C:\\x.txt", "c:x.txt"] {
            assert!(key_for_filename(name).is_err(), "{name} should be rejected");
        }
    }

    #[cfg(unix)]
    #[test]
    fn colons_are_ordinary_characters() {
        assert_eq!(key_for_filename("a:b.txt").unwrap(), "a:b.txt");
        assert_eq!(key_for_filename("C:report.txt").unwrap(), "C:report.txt");
        assert_eq!(key_for_filename("C:\\dir\\x.txt").unwrap(), "x.txt");
        assert!(validate_key("a:b.txt").is_ok());
    }

    #[test]
    fn names_without_a_final_component_are_rejected() {
        for name in ["dir/", ".", "a/.", "nul\0byte"] {
            assert!(key_for_filename(name).is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn validate_key_accepts_only_flat_names() {
        assert!(validate_key("report.txt").is_ok());
        assert!(validate_key("a/b").is_err());
        assert!(validate_key("..").is_err());
        assert!(validate_key(".").is_err());
        assert!(validate_key("").is_err());
    }
}
