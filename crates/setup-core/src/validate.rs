//! Input validation for user-supplied names and paths
//!
//! All validators are pure and total: invalid input comes back as a typed
//! [`InvalidInput`] whose `Display` string is shown to the user verbatim,
//! so the wording doubles as the re-prompt message.

use std::fmt;
use thiserror::Error;

/// Maximum length for plugin/theme folder names
pub const MAX_FOLDER_NAME_LEN: usize = 50;

/// Rejection reasons for user-supplied strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    #[error("Folder name can only contain letters, numbers, hyphens, and underscores")]
    IllegalCharacter,

    #[error("Folder name is too long (max {MAX_FOLDER_NAME_LEN} characters)")]
    TooLong,

    #[error("Please use relative paths within the WordPress directory")]
    OutsideProjectRoot,

    #[error("CSS path must end with .css extension")]
    MissingCssExtension,
}

/// A validated plugin or theme folder name
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct FolderName(String);

impl FolderName {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with hyphens mapped to underscores, safe to interpolate
    /// into generated PHP function names.
    pub fn php_prefix(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for FolderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A validated path relative to the project root
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct RelPath(String);

impl RelPath {
    /// Wrap a compile-time path literal that already satisfies the
    /// relative-path rules. Not for user input; use [`validate_path`].
    pub(crate) fn known(path: &str) -> RelPath {
        debug_assert!(validate_path(path).is_ok());
        RelPath(path.to_string())
    }

    /// `wp-content/plugins`
    pub(crate) fn plugins_dir() -> RelPath {
        RelPath::known("wp-content/plugins")
    }

    /// `wp-content/themes`
    pub(crate) fn themes_dir() -> RelPath {
        RelPath::known("wp-content/themes")
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Join a further relative segment with a forward slash.
    pub fn join(&self, segment: &str) -> RelPath {
        let base = self.0.trim_end_matches('/');
        RelPath(format!("{}/{}", base, segment))
    }

    /// Everything before the final slash, or `None` for a bare filename.
    pub fn parent(&self) -> Option<RelPath> {
        let trimmed = self.0.trim_end_matches('/');
        trimmed.rfind('/').map(|idx| RelPath(trimmed[..idx].to_string()))
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Default per-target CSS output path offered by the prompts
pub const DEFAULT_CSS_PATH: &str = "assets/css/main.css";

/// A validated relative path to a `.css` file
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CssPath(RelPath);

impl CssPath {
    /// The default `assets/css/main.css` target.
    pub fn default_main() -> CssPath {
        CssPath(RelPath(DEFAULT_CSS_PATH.to_string()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_rel_path(&self) -> &RelPath {
        &self.0
    }
}

impl fmt::Display for CssPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validate a plugin or theme folder name.
///
/// Checks run in the same order the interactive flow reports them:
/// emptiness, then character set, then length.
pub fn validate_folder_name(input: &str) -> Result<FolderName, InvalidInput> {
    let name = input.trim();
    if name.is_empty() {
        return Err(InvalidInput::Empty("Folder name"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(InvalidInput::IllegalCharacter);
    }
    if name.len() > MAX_FOLDER_NAME_LEN {
        return Err(InvalidInput::TooLong);
    }
    Ok(FolderName(name.to_string()))
}

/// Validate a path relative to the project root.
///
/// Rejects absolute paths and any `../` traversal so resolved paths can
/// never escape the tree.
pub fn validate_path(input: &str) -> Result<RelPath, InvalidInput> {
    let path = input.trim();
    if path.is_empty() {
        return Err(InvalidInput::Empty("Path"));
    }
    if path.starts_with('/') || path.contains("../") {
        return Err(InvalidInput::OutsideProjectRoot);
    }
    Ok(RelPath(path.to_string()))
}

/// Validate a relative CSS file path.
pub fn validate_css_path(input: &str) -> Result<CssPath, InvalidInput> {
    let path = input.trim();
    if path.is_empty() {
        return Err(InvalidInput::Empty("CSS path"));
    }
    if !path.ends_with(".css") {
        return Err(InvalidInput::MissingCssExtension);
    }
    if path.starts_with('/') || path.contains("../") {
        return Err(InvalidInput::OutsideProjectRoot);
    }
    Ok(CssPath(RelPath(path.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folder_name_accepts_letters_digits_hyphen_underscore() {
        assert!(validate_folder_name("acme").is_ok());
        assert!(validate_folder_name("acme-theme_2").is_ok());
    }

    #[test]
    fn test_folder_name_rejects_empty_and_whitespace() {
        assert_eq!(
            validate_folder_name(""),
            Err(InvalidInput::Empty("Folder name"))
        );
        assert_eq!(
            validate_folder_name("   "),
            Err(InvalidInput::Empty("Folder name"))
        );
    }

    #[test]
    fn test_folder_name_rejects_illegal_characters() {
        assert_eq!(
            validate_folder_name("my plugin"),
            Err(InvalidInput::IllegalCharacter)
        );
        assert_eq!(
            validate_folder_name("acme/evil"),
            Err(InvalidInput::IllegalCharacter)
        );
    }

    #[test]
    fn test_folder_name_rejects_over_50_chars() {
        let long = "a".repeat(51);
        assert_eq!(validate_folder_name(&long), Err(InvalidInput::TooLong));
        assert!(validate_folder_name(&"a".repeat(50)).is_ok());
    }

    #[test]
    fn test_charset_checked_before_length() {
        // A long name with bad characters reports the charset problem
        let long_bad = format!("{} x", "a".repeat(60));
        assert_eq!(
            validate_folder_name(&long_bad),
            Err(InvalidInput::IllegalCharacter)
        );
    }

    #[test]
    fn test_php_prefix_replaces_hyphens() {
        let name = validate_folder_name("acme-theme").unwrap();
        assert_eq!(name.php_prefix(), "acme_theme");
    }

    #[test]
    fn test_path_rejects_traversal_and_absolute() {
        assert_eq!(
            validate_path("../secrets"),
            Err(InvalidInput::OutsideProjectRoot)
        );
        assert_eq!(
            validate_path("/etc/passwd"),
            Err(InvalidInput::OutsideProjectRoot)
        );
        assert_eq!(
            validate_path("wp-content/a/../b"),
            Err(InvalidInput::OutsideProjectRoot)
        );
    }

    #[test]
    fn test_path_accepts_nested_relative() {
        assert!(validate_path("wp-content/assets").is_ok());
    }

    #[test]
    fn test_css_path_requires_css_suffix() {
        assert_eq!(
            validate_css_path("a/b/c"),
            Err(InvalidInput::MissingCssExtension)
        );
        assert!(validate_css_path("a/b/c.css").is_ok());
    }

    #[test]
    fn test_css_path_rejects_traversal() {
        assert_eq!(
            validate_css_path("../styles/main.css"),
            Err(InvalidInput::OutsideProjectRoot)
        );
    }

    #[test]
    fn test_rel_path_parent_and_join() {
        let p = validate_path("assets/css/main.css").unwrap();
        assert_eq!(p.parent().unwrap().as_str(), "assets/css");
        let d = validate_path("wp-content/plugins").unwrap();
        assert_eq!(d.join("acme").as_str(), "wp-content/plugins/acme");
    }
}
