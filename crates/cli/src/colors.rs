use std::io::{stdout, Write};

use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::tty::IsTty;
use dir_browser_core::error::Result;
use dir_browser_core::listing::{DirectoryEntry, EntryStyle};

/// Trait for converting display styles to terminal colors
pub trait AsTermColor {
    fn as_crossterm_color(&self) -> Option<Color>;
}

impl AsTermColor for EntryStyle {
    fn as_crossterm_color(&self) -> Option<Color> {
        match self {
            EntryStyle::Directory => Some(Color::Blue),
            EntryStyle::Executable => Some(Color::Green),
            EntryStyle::Hidden => Some(Color::DarkGrey),
            EntryStyle::Default => None,
        }
    }
}

/// Whether entry names are written with color escape sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Enabled,
    Disabled,
}

impl ColorMode {
    /// Enables color only when stdout is a terminal that understands ANSI
    /// sequences. crossterm additionally honours `NO_COLOR`.
    #[must_use]
    pub fn detect() -> Self {
        if stdout().is_tty() && enable_ansi_support() {
            ColorMode::Enabled
        } else {
            ColorMode::Disabled
        }
    }

    /// Writes the entry name, colored by its style when color is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn write_entry_name<W: Write>(self, out: &mut W, entry: &DirectoryEntry) -> Result<()> {
        match (self, entry.style().as_crossterm_color()) {
            (ColorMode::Enabled, Some(color)) => queue!(
                out,
                SetForegroundColor(color),
                Print(&entry.name),
                ResetColor
            )?,
            _ => queue!(out, Print(&entry.name))?,
        }

        Ok(())
    }
}

// Windows consoles only interpret escape sequences once virtual terminal
// processing is switched on, which this does (idempotently).
#[cfg(windows)]
fn enable_ansi_support() -> bool {
    crossterm::ansi_support::supports_ansi()
}

#[cfg(not(windows))]
fn enable_ansi_support() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_name(mode: ColorMode, entry: &DirectoryEntry) -> String {
        let mut out = Vec::new();
        mode.write_entry_name(&mut out, entry).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_style_colors() {
        assert_eq!(EntryStyle::Directory.as_crossterm_color(), Some(Color::Blue));
        assert_eq!(EntryStyle::Executable.as_crossterm_color(), Some(Color::Green));
        assert_eq!(EntryStyle::Hidden.as_crossterm_color(), Some(Color::DarkGrey));
        assert_eq!(EntryStyle::Default.as_crossterm_color(), None);
    }

    #[test]
    fn test_disabled_writes_plain_name() {
        let entry = DirectoryEntry::new("docs".to_string(), true);
        assert_eq!(write_name(ColorMode::Disabled, &entry), "docs");
    }

    #[cfg(not(windows))]
    #[test]
    fn test_enabled_wraps_name_in_escapes() {
        let entry = DirectoryEntry::new("docs".to_string(), true);
        let written = write_name(ColorMode::Enabled, &entry);

        assert!(written.starts_with("\x1b["));
        assert!(written.contains("docs"));
        assert!(written.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_enabled_leaves_default_style_plain() {
        let entry = DirectoryEntry::new("notes.txt".to_string(), false);
        assert_eq!(write_name(ColorMode::Enabled, &entry), "notes.txt");
    }
}
