mod commands;
mod enums;
pub mod hints;
mod input;

pub use commands::*;
pub use enums::*;
pub use input::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "taller")]
#[command(about = "Administration console for a small vehicle repair shop", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to TALLER_CONFIG, then the user config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    /// Overrides RUST_LOG; logs go to stderr
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
