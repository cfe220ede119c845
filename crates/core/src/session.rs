//! The browsing session and its state transitions.
//!
//! A [`Session`] owns the current path and is the only thing that changes
//! it. Each call to [`Session::execute`] applies exactly one [`Command`].

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::command::Command;
use crate::error::{Error, Result};

/// What the loop should do after a command has been applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Continue,
    Terminate,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    current_path: PathBuf,
}

impl Session {
    #[must_use]
    pub fn new(current_path: PathBuf) -> Self {
        Session { current_path }
    }

    #[must_use]
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// Moves into `folder`, resolved against the current path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDirectory`] if the target is not a directory.
    /// The current path is left unchanged.
    pub fn change_directory(&mut self, folder: &str) -> Result<()> {
        let new_path = self.current_path.join(folder);

        if !new_path.is_dir() {
            return Err(Error::invalid_directory(new_path));
        }

        debug!("Changing directory to `{}`", new_path.display());
        self.current_path = new_path;
        Ok(())
    }

    /// Moves to the parent directory, returning whether the path changed.
    ///
    /// At a root (or a single relative component) there is no parent and
    /// this silently does nothing.
    pub fn go_up(&mut self) -> bool {
        let Some(parent) = self.current_path.parent() else {
            return false;
        };

        if parent.as_os_str().is_empty() {
            return false;
        }

        debug!("Moving up to `{}`", parent.display());
        self.current_path = parent.to_path_buf();
        true
    }

    /// Writes every line of `file`, resolved against the current path, to
    /// `out`.
    ///
    /// Lines are copied as raw bytes. A `\r\n` ending becomes `\n`, and a
    /// last line without a newline gets one.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidFile`] if the target is not a regular file
    /// - [`Error::FileOpen`] if it cannot be opened
    /// - [`Error::FileRead`] if reading fails part way through
    /// - [`Error::Stdio`] if writing to `out` fails
    pub fn open_file<W: Write>(&self, file: &str, out: &mut W) -> Result<()> {
        let file_path = self.current_path.join(file);

        if !file_path.is_file() {
            return Err(Error::invalid_file(file_path));
        }

        let reader = match File::open(&file_path) {
            Ok(reader) => BufReader::new(reader),
            Err(e) => {
                warn!("Could not open `{}`: {}", file_path.display(), e);
                return Err(Error::file_open(file_path, e));
            }
        };

        copy_lines(reader, out).map_err(|e| match e {
            CopyError::Read(e) => {
                warn!("Could not read `{}`: {}", file_path.display(), e);
                Error::file_read(file_path.clone(), e)
            }
            CopyError::Write(e) => Error::Stdio(e),
        })
    }

    /// Applies one command.
    ///
    /// # Errors
    ///
    /// Returns the recoverable error for an invalid target or unknown
    /// command, or [`Error::Stdio`] if output fails.
    pub fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Transition> {
        debug!("Executing `{command}` in `{}`", self.current_path.display());

        match command {
            Command::Quit => return Ok(Transition::Terminate),
            Command::Up => {
                self.go_up();
            }
            Command::ChangeDirectory(folder) => self.change_directory(&folder)?,
            Command::Open(file) => self.open_file(&file, out)?,
            Command::Unknown(line) => return Err(Error::UnknownCommand(line)),
        }

        Ok(Transition::Continue)
    }
}

enum CopyError {
    Read(std::io::Error),
    Write(std::io::Error),
}

fn copy_lines<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> std::result::Result<(), CopyError> {
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader.read_until(b'\n', &mut line).map_err(CopyError::Read)?;
        if read == 0 {
            return Ok(());
        }

        let content = line
            .strip_suffix(b"\n")
            .map(|content| content.strip_suffix(b"\r").unwrap_or(content))
            .unwrap_or(&line);

        out.write_all(content).map_err(CopyError::Write)?;
        out.write_all(b"\n").map_err(CopyError::Write)?;
    }
}
