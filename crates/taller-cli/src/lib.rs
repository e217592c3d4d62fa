// Command-line surface of the repair-shop console.
//
// One-shot commands (list, show, create, edit, delete) mount a screen from
// its seed, apply the requested action through the same CrudScreen the
// interactive console drives, print the result and exit. Nothing persists
// between invocations.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    Assignment, Cli, Commands, ConfigCommand, LineInput, LogLevel, OutputFormat, parse_assignment,
    parse_line,
};
pub use commands::run;
