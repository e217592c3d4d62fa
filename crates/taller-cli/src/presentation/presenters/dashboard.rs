use taller_runtime::{Dashboard, SHELL_TITLE};

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, DashboardCardViewModel, DashboardViewModel, Guidance,
};

pub fn dashboard_view_model(dashboard: &Dashboard) -> DashboardViewModel {
    DashboardViewModel {
        title: SHELL_TITLE.to_string(),
        date: dashboard.date.clone(),
        cards: dashboard
            .cards
            .iter()
            .map(|card| DashboardCardViewModel {
                title: card.title.to_string(),
                value: card.value.clone(),
            })
            .collect(),
    }
}

pub fn present_dashboard(dashboard: &Dashboard) -> CommandResultViewModel<DashboardViewModel> {
    CommandResultViewModel::new(dashboard_view_model(dashboard))
        .with_suggestion(Guidance::new("Browse the screens").with_command(cmd::SCREENS))
}
