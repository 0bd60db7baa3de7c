//! WordPress project-root detection

use std::path::Path;
use thiserror::Error;

/// The directory is not a WordPress root. Raised before any mutation; the
/// run aborts with a non-zero exit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "This doesn't appear to be a WordPress root directory ({missing} not found). \
     Run this from your WordPress root folder, where wp-config.php is located."
)]
pub struct PreconditionFailure {
    pub missing: &'static str,
}

/// Check that `root` holds both a `wp-content/` directory and a
/// `wp-config.php` file.
pub fn ensure_wordpress_root(root: &Path) -> Result<(), PreconditionFailure> {
    if !root.join("wp-content").is_dir() {
        return Err(PreconditionFailure {
            missing: "wp-content/",
        });
    }
    if !root.join("wp-config.php").is_file() {
        return Err(PreconditionFailure {
            missing: "wp-config.php",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_wordpress_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("wp-content")).unwrap();
        std::fs::write(dir.path().join("wp-config.php"), "<?php").unwrap();

        assert!(ensure_wordpress_root(dir.path()).is_ok());
    }

    #[test]
    fn test_missing_wp_content_names_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wp-config.php"), "<?php").unwrap();

        let err = ensure_wordpress_root(dir.path()).unwrap_err();
        assert_eq!(err.missing, "wp-content/");
        assert!(err.to_string().contains("wp-content/"));
    }

    #[test]
    fn test_missing_wp_config_names_the_artifact() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("wp-content")).unwrap();

        let err = ensure_wordpress_root(dir.path()).unwrap_err();
        assert_eq!(err.missing, "wp-config.php");
    }

    #[test]
    fn test_wp_content_must_be_a_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("wp-content"), "not a dir").unwrap();
        std::fs::write(dir.path().join("wp-config.php"), "<?php").unwrap();

        assert!(ensure_wordpress_root(dir.path()).is_err());
    }
}
