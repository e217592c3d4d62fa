use taller_runtime::{Route, SHELL_TITLE, Workspace};

use crate::args::hints::{cmd, fmt};
use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, ScreenEntryViewModel, ScreenListViewModel, StatusBadge,
    WelcomeViewModel,
};

pub fn present_screen_list(routes: &[Route]) -> CommandResultViewModel<ScreenListViewModel> {
    let screens = routes
        .iter()
        .map(|route| ScreenEntryViewModel {
            path: route.path().to_string(),
            title: route.title().to_string(),
            composite: match route {
                Route::Dashboard => false,
                Route::Screen(kind) => taller_catalog::schema(*kind).is_composite(),
            },
        })
        .collect();

    CommandResultViewModel::new(ScreenListViewModel {
        shell_title: SHELL_TITLE.to_string(),
        screens,
    })
    .with_suggestion(Guidance::new("List a screen").with_command(fmt::list("calles")))
}

pub fn present_welcome(
    workspace: &Workspace,
    routes: &[Route],
) -> CommandResultViewModel<WelcomeViewModel> {
    let config_exists = workspace.config_path().exists();
    let content = WelcomeViewModel {
        shell_title: SHELL_TITLE.to_string(),
        screen_count: routes
            .iter()
            .filter(|route| matches!(route, Route::Screen(_)))
            .count(),
        config_path: workspace.config_path().display().to_string(),
        config_exists,
    };

    let mut result = CommandResultViewModel::new(content)
        .with_badge(StatusBadge::info("Nothing to do without a command"))
        .with_suggestion(Guidance::new("See every screen").with_command(cmd::SCREENS))
        .with_suggestion(Guidance::new("Open the interactive console").with_command(cmd::CONSOLE))
        .with_suggestion(Guidance::new("Summary cards").with_command(cmd::DASHBOARD));

    if !config_exists {
        result = result
            .with_suggestion(Guidance::new("Write a config file").with_command(cmd::CONFIG_INIT));
    }
    result
}
