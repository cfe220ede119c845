use std::fmt::{Display, Formatter};

const QUIT_KEYWORD: &str = "quit";
const UP_KEYWORD: &str = "up";
const CHANGE_DIRECTORY_PREFIX: &str = "cd ";
const OPEN_PREFIX: &str = "open ";

/// A single parsed line of user input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Up,
    ChangeDirectory(String),
    Open(String),
    Unknown(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// The line is trimmed before matching and keywords are case-sensitive.
    /// `cd` and `open` need a non-empty argument, which may itself contain
    /// spaces.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let line = line.trim();

        if line == QUIT_KEYWORD {
            return Command::Quit;
        }

        if line == UP_KEYWORD {
            return Command::Up;
        }

        if let Some(argument) = non_empty_argument(line, CHANGE_DIRECTORY_PREFIX) {
            return Command::ChangeDirectory(argument);
        }

        if let Some(argument) = non_empty_argument(line, OPEN_PREFIX) {
            return Command::Open(argument);
        }

        Command::Unknown(line.to_string())
    }
}

fn non_empty_argument(line: &str, prefix: &str) -> Option<String> {
    line.strip_prefix(prefix)
        .map(str::trim_start)
        .filter(|argument| !argument.is_empty())
        .map(ToString::to_string)
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Quit => f.write_str(QUIT_KEYWORD),
            Command::Up => f.write_str(UP_KEYWORD),
            Command::ChangeDirectory(folder) => write!(f, "{CHANGE_DIRECTORY_PREFIX}{folder}"),
            Command::Open(file) => write!(f, "{OPEN_PREFIX}{file}"),
            Command::Unknown(line) => f.write_str(line),
        }
    }
}
