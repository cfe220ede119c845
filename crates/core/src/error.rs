use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid directory.")]
    InvalidDirectory { path: PathBuf },

    #[error("Not a valid file.")]
    InvalidFile { path: PathBuf },

    #[error("Failed to open file.")]
    FileOpen {
        path: PathBuf,
        original: std::io::Error,
    },

    #[error("Failed to read file.")]
    FileRead {
        path: PathBuf,
        original: std::io::Error,
    },

    #[error("Could not list directory `{}`: {}", .path.display(), .original)]
    DirectoryRead {
        path: PathBuf,
        original: std::io::Error,
    },

    #[error("Unknown command.")]
    UnknownCommand(String),

    #[error("Could not determine a starting directory: {}", .0)]
    NoStartingDirectory(std::io::Error),

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_directory(path: PathBuf) -> Self {
        Self::InvalidDirectory { path }
    }

    pub fn invalid_file(path: PathBuf) -> Self {
        Self::InvalidFile { path }
    }

    pub fn file_open(path: PathBuf, original: std::io::Error) -> Self {
        Self::FileOpen { path, original }
    }

    pub fn file_read(path: PathBuf, original: std::io::Error) -> Self {
        Self::FileRead { path, original }
    }

    pub fn directory_read(path: PathBuf, original: std::io::Error) -> Self {
        Self::DirectoryRead { path, original }
    }

    /// Whether the browsing session can report this error and carry on.
    ///
    /// Everything caused by a single user command is recoverable. Failing to
    /// find a starting directory, or losing stdin/stdout, is not.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::NoStartingDirectory(_) | Self::Stdio(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    fn io_error() -> std::io::Error {
        std::io::Error::new(ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn test_user_facing_messages() {
        let path = PathBuf::from("somewhere");

        assert_eq!(
            Error::invalid_directory(path.clone()).to_string(),
            "Invalid directory."
        );
        assert_eq!(
            Error::invalid_file(path.clone()).to_string(),
            "Not a valid file."
        );
        assert_eq!(
            Error::file_open(path.clone(), io_error()).to_string(),
            "Failed to open file."
        );
        assert_eq!(
            Error::file_read(path, io_error()).to_string(),
            "Failed to read file."
        );
        assert_eq!(
            Error::UnknownCommand("bogus".to_string()).to_string(),
            "Unknown command."
        );
    }

    #[test]
    fn test_directory_read_message_names_path() {
        let error = Error::directory_read(PathBuf::from("/gone"), io_error());
        assert_eq!(error.to_string(), "Could not list directory `/gone`: denied");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(Error::invalid_directory(PathBuf::from("x")).is_recoverable());
        assert!(Error::invalid_file(PathBuf::from("x")).is_recoverable());
        assert!(Error::file_open(PathBuf::from("x"), io_error()).is_recoverable());
        assert!(Error::directory_read(PathBuf::from("x"), io_error()).is_recoverable());
        assert!(Error::UnknownCommand(String::new()).is_recoverable());

        assert!(!Error::NoStartingDirectory(io_error()).is_recoverable());
        assert!(!Error::from(io_error()).is_recoverable());
    }
}
