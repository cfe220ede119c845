//! Prompt rendering for the current location.

use std::path::{Component, Path, MAIN_SEPARATOR_STR};

use itertools::Itertools;

const SEPARATOR: &str = " > ";

/// Renders `path` as `[a > b > c] > `.
///
/// The root directory shows up as the platform separator and a Windows
/// prefix (`C:`) as written. Nothing here touches the filesystem.
#[must_use]
pub fn render_breadcrumb(path: &Path) -> String {
    let crumbs = path
        .components()
        .map(|component| match component {
            Component::RootDir => MAIN_SEPARATOR_STR.to_string(),
            other => other.as_os_str().to_string_lossy().to_string(),
        })
        .join(SEPARATOR);

    format!("[{crumbs}]{SEPARATOR}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_empty_path() {
        assert_eq!(render_breadcrumb(Path::new("")), "[] > ");
    }

    #[test]
    fn test_relative_path() {
        assert_eq!(render_breadcrumb(Path::new("docs")), "[docs] > ");
        assert_eq!(
            render_breadcrumb(Path::new("projects/rust/src")),
            "[projects > rust > src] > "
        );
    }

    #[cfg(not(windows))]
    #[test]
    fn test_absolute_path() {
        assert_eq!(
            render_breadcrumb(Path::new("/home/user")),
            "[/ > home > user] > "
        );
        assert_eq!(render_breadcrumb(Path::new("/")), "[/] > ");
    }

    #[test]
    fn test_trailing_separator_is_ignored() {
        let path: PathBuf = ["docs", "notes"].iter().collect();
        let mut with_separator = path.clone().into_os_string();
        with_separator.push(MAIN_SEPARATOR_STR);

        assert_eq!(
            render_breadcrumb(Path::new(&with_separator)),
            render_breadcrumb(&path)
        );
    }
}
