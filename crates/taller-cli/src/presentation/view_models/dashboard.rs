use serde::Serialize;
use std::fmt;

use crate::presentation::views::DashboardView;

#[derive(Debug, Serialize)]
pub struct DashboardViewModel {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub cards: Vec<DashboardCardViewModel>,
}

#[derive(Debug, Serialize)]
pub struct DashboardCardViewModel {
    pub title: String,
    pub value: String,
}

impl fmt::Display for DashboardViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DashboardView::new(self))
    }
}
