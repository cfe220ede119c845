use std::io::{stdin, stdout};
use std::process::ExitCode;

use dir_browser_cli::browser::Browser;
use dir_browser_cli::colors::ColorMode;
use dir_browser_core::config::{self, SystemHomeLocator};
use dir_browser_core::error::Result;
use dir_browser_core::session::Session;
use log::debug;

fn execute() -> Result<()> {
    let starting_directory = config::resolve_starting_directory(&SystemHomeLocator)?;

    let color_mode = ColorMode::detect();
    debug!("Color mode: {:?}", color_mode);

    let mut input = stdin().lock();
    let mut output = stdout().lock();

    let session = Browser::new(color_mode).run(
        Session::new(starting_directory),
        &mut input,
        &mut output,
    )?;

    debug!("Finished in `{}`", session.current_path().display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
