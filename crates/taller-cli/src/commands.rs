use anyhow::Result;
use taller_runtime::Workspace;

use super::args::{Cli, Commands, ConfigCommand, OutputFormat};
use super::handlers;
use crate::logging;
use crate::presentation::ConsoleRenderer;

pub fn run(cli: Cli) -> Result<()> {
    let interactive = matches!(cli.command, Some(Commands::Console { .. }));
    logging::init(cli.log_level, interactive);

    let workspace = Workspace::open(cli.config.as_deref())?;
    let renderer = ConsoleRenderer::new(cli.format == OutputFormat::Json);

    let Some(command) = cli.command else {
        return handlers::screens::handle_welcome(&workspace, &renderer);
    };

    match command {
        Commands::Screens => handlers::screens::handle(&renderer),

        Commands::Dashboard => handlers::dashboard::handle(&workspace, &renderer),

        Commands::List { screen, page } => {
            handlers::list::handle(&workspace, &screen, page, &renderer)
        }

        Commands::Show { screen, id } => handlers::show::handle(&workspace, &screen, id, &renderer),

        Commands::Create { screen, set, line } => {
            handlers::form::handle_create(&workspace, &screen, &set, &line, &renderer)
        }

        Commands::Edit {
            screen,
            id,
            set,
            line,
        } => handlers::form::handle_edit(&workspace, &screen, id, &set, &line, &renderer),

        Commands::Delete { screen, ids, yes } => {
            handlers::delete::handle(&workspace, &screen, &ids, yes, &renderer)
        }

        Commands::Console { screen } => handlers::console::handle(workspace, screen.as_deref()),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::handle_show(&workspace, &renderer),
            ConfigCommand::Init { force } => {
                handlers::config::handle_init(&workspace, force, &renderer)
            }
        },
    }
}
