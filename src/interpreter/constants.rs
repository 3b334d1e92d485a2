// Constants for the calculator session

/// Printed when the session ends through `/exit`
pub const EXIT_MESSAGE: &str = "Bye!";

/// Reply for any `/` command that is not recognized
pub const UNKNOWN_COMMAND_MESSAGE: &str = "Unknown command";

pub const HELP_MESSAGE: &str = "The program evaluates integer expressions with + - * / and brackets. \
Assign variables with `name = value`, type a name to print its value, /exit to quit.";

/// Commands that start with `/`
pub const EXIT_COMMAND: &str = "/exit";
pub const HELP_COMMAND: &str = "/help";
