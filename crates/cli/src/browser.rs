//! The interactive read-eval-print loop.
//!
//! Each turn lists the current directory, shows the help line and the
//! breadcrumb prompt, reads one line and applies it to the [`Session`].
//! Input and output are generic so the loop can be driven from memory.

use std::io::{BufRead, Write};
use std::path::Path;

use crossterm::queue;
use crossterm::style::Print;
use dir_browser_core::command::Command;
use dir_browser_core::error::Result;
use dir_browser_core::listing::list_directory;
use dir_browser_core::session::{Session, Transition};
use log::{debug, warn};

use crate::colors::ColorMode;
use crate::input::{read_command_line, write_prompt};

/// Help line shown before every prompt
pub const HELP_TEXT: &str = "Commands: cd <folder>, up, open <file>, quit";

const DIRECTORY_MARKER: &str = "[DIR]  ";
const FILE_MARKER: &str = "       ";

pub struct Browser {
    color_mode: ColorMode,
}

impl Browser {
    #[must_use]
    pub fn new(color_mode: ColorMode) -> Self {
        Browser { color_mode }
    }

    /// Runs the loop until `quit` or end of input, returning the final
    /// session.
    ///
    /// Invalid targets, unreadable files and unknown commands are reported
    /// on `out` and the loop carries on from the same directory.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `out` fails.
    pub fn run<R: BufRead, W: Write>(
        &self,
        mut session: Session,
        input: &mut R,
        out: &mut W,
    ) -> Result<Session> {
        loop {
            self.print_listing(session.current_path(), out)?;

            writeln!(out)?;
            writeln!(out, "{HELP_TEXT}")?;
            write_prompt(out, session.current_path())?;

            let Some(line) = read_command_line(input)? else {
                debug!("End of input, quitting");
                return Ok(session);
            };

            match session.execute(Command::parse(&line), out) {
                Ok(Transition::Terminate) => return Ok(session),
                Ok(Transition::Continue) => {}
                Err(e) if e.is_recoverable() => writeln!(out, "{e}")?,
                Err(e) => return Err(e),
            }
        }
    }

    fn print_listing<W: Write>(&self, path: &Path, out: &mut W) -> Result<()> {
        writeln!(out)?;
        writeln!(out, "Contents of: {}", path.display())?;

        let entries = match list_directory(path) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{e}");
                writeln!(out, "{e}")?;
                return Ok(());
            }
        };

        for entry in &entries {
            let marker = if entry.is_directory {
                DIRECTORY_MARKER
            } else {
                FILE_MARKER
            };

            queue!(out, Print(marker))?;
            self.color_mode.write_entry_name(out, entry)?;
            writeln!(out)?;
        }

        Ok(())
    }
}
