//! Directory listing and display-style classification.
//!
//! Entries are read fresh from the filesystem every time a directory is
//! shown. Style is a pure function of the entry's kind and name, and only
//! ever affects how an entry is colored.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use itertools::Itertools;
use log::debug;

use crate::error::{Error, Result};

/// Extensions (compared case-insensitively) that mark a file as executable.
#[cfg(windows)]
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "ps1", "msi"];
#[cfg(not(windows))]
const EXECUTABLE_EXTENSIONS: &[&str] = &["sh", "bash", "zsh", "fish", "run", "bin", "appimage"];

/// How an entry should be highlighted when listed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryStyle {
    Default,
    Directory,
    Executable,
    Hidden,
}

/// One immediate child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
    pub extension: Option<String>,
}

impl DirectoryEntry {
    #[must_use]
    pub fn new(name: String, is_directory: bool) -> Self {
        let extension = Path::new(&name)
            .extension()
            .map(|extension| extension.to_string_lossy().to_string());

        DirectoryEntry {
            name,
            is_directory,
            extension,
        }
    }

    #[must_use]
    pub fn style(&self) -> EntryStyle {
        classify(self.is_directory, &self.name, self.extension.as_deref())
    }

    fn display_order(&self, other: &Self) -> Ordering {
        other
            .is_directory
            .cmp(&self.is_directory)
            .then_with(|| self.name.cmp(&other.name))
    }
}

/// Picks the display style for an entry.
///
/// Directories win over everything else, then executable extensions, then
/// dot-prefixed (hidden) names.
#[must_use]
pub fn classify(is_directory: bool, name: &str, extension: Option<&str>) -> EntryStyle {
    if is_directory {
        return EntryStyle::Directory;
    }

    let is_executable = extension.is_some_and(|extension| {
        EXECUTABLE_EXTENSIONS
            .iter()
            .any(|known| known.eq_ignore_ascii_case(extension))
    });

    if is_executable {
        EntryStyle::Executable
    } else if name.starts_with('.') {
        EntryStyle::Hidden
    } else {
        EntryStyle::Default
    }
}

/// Lists the immediate children of `path`.
///
/// Directories come first, then files, each group ordered by name. Symbolic
/// links are classified by what they point to.
///
/// # Errors
///
/// Returns [`Error::DirectoryRead`] if the directory, or any entry in it,
/// cannot be read.
pub fn list_directory(path: &Path) -> Result<Vec<DirectoryEntry>> {
    let read_error = |e: std::io::Error| Error::directory_read(path.to_path_buf(), e);

    let mut entries = Vec::new();
    for dir_entry in fs::read_dir(path).map_err(read_error)? {
        let dir_entry = dir_entry.map_err(read_error)?;
        let file_type = dir_entry.file_type().map_err(read_error)?;

        let is_directory = if file_type.is_symlink() {
            dir_entry.path().is_dir()
        } else {
            file_type.is_dir()
        };

        let name = dir_entry.file_name().to_string_lossy().to_string();
        entries.push(DirectoryEntry::new(name, is_directory));
    }

    debug!("Listed {} entries in `{}`", entries.len(), path.display());

    Ok(entries
        .into_iter()
        .sorted_by(DirectoryEntry::display_order)
        .collect())
}
