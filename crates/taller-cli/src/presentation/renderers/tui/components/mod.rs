use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use super::app::App;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, app: &App);
}

pub(crate) mod confirm;
pub(crate) mod dashboard;
pub(crate) mod form;
pub(crate) mod sidebar;
pub(crate) mod status_bar;
pub(crate) mod table;

pub(crate) use confirm::ConfirmComponent;
pub(crate) use dashboard::DashboardComponent;
pub(crate) use form::FormComponent;
pub(crate) use sidebar::SidebarComponent;
pub(crate) use status_bar::StatusBarComponent;
pub(crate) use table::TableComponent;

/// Rectangle of `percent_x` by `percent_y` centred in `area`
pub(crate) fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let margin_y = (100 - percent_y) / 2;
    let margin_x = (100 - percent_x) / 2;

    let rows = Layout::vertical([
        Constraint::Percentage(margin_y),
        Constraint::Percentage(percent_y),
        Constraint::Percentage(margin_y),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage(margin_x),
        Constraint::Percentage(percent_x),
        Constraint::Percentage(margin_x),
    ])
    .split(rows[1])[1]
}
