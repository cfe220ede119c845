//! Starting directory resolution.
//!
//! The browser starts in the user's home directory (their Desktop on
//! Windows) and falls back to the process working directory when that is
//! unavailable. Platform lookups sit behind [`HomeLocator`] so the rest of
//! the crate never branches on the target OS.

use std::env;
use std::path::PathBuf;

use log::{debug, info};

use crate::error::{Error, Result};

/// Environment variable holding the user's home directory
#[cfg(windows)]
pub const HOME_VARIABLE: &str = "USERPROFILE";
#[cfg(not(windows))]
pub const HOME_VARIABLE: &str = "HOME";

/// Folder appended to the home directory to form the starting location
#[cfg(windows)]
const HOME_SUBFOLDER: Option<&str> = Some("Desktop");
#[cfg(not(windows))]
const HOME_SUBFOLDER: Option<&str> = None;

/// Source of candidate starting directories.
pub trait HomeLocator {
    /// The preferred starting directory, if the platform lookup succeeds.
    fn candidate_home(&self) -> Option<PathBuf>;

    /// The working directory of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;
}

/// Looks up the home directory from the process environment.
pub struct SystemHomeLocator;

impl HomeLocator for SystemHomeLocator {
    fn candidate_home(&self) -> Option<PathBuf> {
        let home = env::var_os(HOME_VARIABLE).filter(|home| !home.is_empty())?;
        let home = PathBuf::from(home);

        Some(match HOME_SUBFOLDER {
            Some(subfolder) => home.join(subfolder),
            None => home,
        })
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        env::current_dir()
    }
}

/// Picks the directory the session starts in.
///
/// Uses the locator's home candidate when it exists as a directory,
/// otherwise the current working directory.
///
/// # Errors
///
/// Returns [`Error::NoStartingDirectory`] if the fallback lookup fails.
///
/// # Examples
///
/// ```no_run
/// use dir_browser_core::config::{resolve_starting_directory, SystemHomeLocator};
///
/// let start = resolve_starting_directory(&SystemHomeLocator)?;
/// println!("Starting in {}", start.display());
/// # Ok::<(), dir_browser_core::error::Error>(())
/// ```
pub fn resolve_starting_directory<L: HomeLocator>(locator: &L) -> Result<PathBuf> {
    if let Some(home) = locator.candidate_home() {
        if home.is_dir() {
            info!("Starting in home directory `{}`", home.display());
            return Ok(home);
        }

        debug!("Home candidate `{}` is not a directory", home.display());
    }

    let current_dir = locator
        .current_dir()
        .map_err(Error::NoStartingDirectory)?;

    info!("Starting in working directory `{}`", current_dir.display());
    Ok(current_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    struct FixedLocator {
        home: Option<PathBuf>,
        current: Option<PathBuf>,
    }

    impl HomeLocator for FixedLocator {
        fn candidate_home(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn current_dir(&self) -> std::io::Result<PathBuf> {
            self.current
                .clone()
                .ok_or_else(|| std::io::Error::new(ErrorKind::NotFound, "no cwd"))
        }
    }

    #[test]
    fn test_existing_home_is_used() {
        let home = env::temp_dir();
        let locator = FixedLocator {
            home: Some(home.clone()),
            current: Some(PathBuf::from("unused")),
        };

        assert_eq!(resolve_starting_directory(&locator).unwrap(), home);
    }

    #[test]
    fn test_missing_home_falls_back_to_current_dir() {
        let locator = FixedLocator {
            home: Some(PathBuf::from("/definitely/not/a/real/home/dir")),
            current: Some(PathBuf::from("/work")),
        };

        assert_eq!(
            resolve_starting_directory(&locator).unwrap(),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn test_no_home_falls_back_to_current_dir() {
        let locator = FixedLocator {
            home: None,
            current: Some(PathBuf::from("/work")),
        };

        assert_eq!(
            resolve_starting_directory(&locator).unwrap(),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn test_no_directory_at_all() {
        let locator = FixedLocator {
            home: None,
            current: None,
        };

        let result = resolve_starting_directory(&locator);
        assert!(matches!(result, Err(Error::NoStartingDirectory(_))));
    }

    #[test]
    fn test_system_locator_current_dir() {
        assert_eq!(
            SystemHomeLocator.current_dir().unwrap(),
            env::current_dir().unwrap()
        );
    }
}
