//! Dir Browser CLI Library
//!
//! This crate provides the terminal front end for dir-browser: the
//! interactive loop that lists the current directory, prompts with a
//! breadcrumb of the current path and applies one command per line.
//!
//! # Architecture
//!
//! - [`browser`]: The read-eval-print loop over any input and output
//! - [`colors`]: Mapping display styles to terminal colors
//! - [`input`]: Prompt writing and line reading
//!
//! # Examples
//!
//! The binary (`db`) takes no arguments:
//!
//! ```bash
//! db
//!
//! # Scripted session
//! printf 'cd src\nopen main.rs\nquit\n' | db
//!
//! # With logging on stderr
//! RUST_LOG=debug db
//! ```

pub mod browser;
pub mod colors;
pub mod input;
