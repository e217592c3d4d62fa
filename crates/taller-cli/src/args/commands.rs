use clap::Subcommand;

use super::input::{Assignment, LineInput, parse_assignment, parse_line};

#[derive(Subcommand)]
pub enum Commands {
    /// List the screens of the navigation shell
    Screens,

    /// Summary cards of the landing page
    Dashboard,

    /// Show one page of a screen's table
    List {
        /// Screen path, e.g. `calles` or `ordenCompra`
        screen: String,

        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// Show a single record with its lookups resolved
    Show { screen: String, id: u32 },

    /// Fill the create form and submit it
    Create {
        screen: String,

        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,

        #[arg(long = "line", value_name = "SECTION:ITEM:QTY:AMOUNT", value_parser = parse_line)]
        line: Vec<LineInput>,
    },

    /// Select a record, open the edit form and submit it
    Edit {
        screen: String,
        id: u32,

        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<Assignment>,

        /// Replaces the items of every section named here
        #[arg(long = "line", value_name = "SECTION:ITEM:QTY:AMOUNT", value_parser = parse_line)]
        line: Vec<LineInput>,
    },

    /// Select records and confirm their deletion
    Delete {
        screen: String,

        #[arg(required = true)]
        ids: Vec<u32>,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Interactive terminal console over every screen
    Console {
        /// Screen to open first (defaults to the dashboard)
        #[arg(long)]
        screen: Option<String>,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show,

    /// Write the default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
