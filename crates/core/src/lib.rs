//! Dir Browser Core Library
//!
//! This crate provides the filesystem-facing half of dir-browser, an
//! interactive terminal directory browser. It knows how to list a directory,
//! classify entries for display, parse user commands and apply them to a
//! browsing session. It has no knowledge of the terminal.
//!
//! # Key Features
//!
//! - **Directory Listing**: One-level listings tagged as directory or file
//! - **Display Styles**: Pure classification into default, directory, executable or hidden
//! - **Command Parsing**: `cd`, `up`, `open` and `quit`
//! - **Session State**: The current path, owned explicitly and changed one command at a time
//! - **Breadcrumbs**: Prompt rendering of the current path
//! - **Starting Directory**: Home directory lookup with a working directory fallback
//!
//! # Examples
//!
//! Driving a session directly:
//!
//! ```no_run
//! use dir_browser_core::command::Command;
//! use dir_browser_core::session::Session;
//!
//! let mut session = Session::new(std::env::current_dir()?);
//! let mut out = std::io::stdout();
//! session.execute(Command::parse("cd src"), &mut out)?;
//! session.execute(Command::parse("open lib.rs"), &mut out)?;
//! # Ok::<(), dir_browser_core::error::Error>(())
//! ```

pub mod breadcrumb;
pub mod command;
pub mod config;
pub mod error;
pub mod listing;
pub mod session;
