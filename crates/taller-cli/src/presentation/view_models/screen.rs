use serde::Serialize;
use std::fmt;

use crate::presentation::views::{ScreenListView, WelcomeView};

#[derive(Debug, Serialize)]
pub struct ScreenListViewModel {
    pub shell_title: String,
    pub screens: Vec<ScreenEntryViewModel>,
}

#[derive(Debug, Serialize)]
pub struct ScreenEntryViewModel {
    pub path: String,
    pub title: String,
    /// Hosts line-item sections in its form
    pub composite: bool,
}

impl fmt::Display for ScreenListViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ScreenListView::new(self))
    }
}

/// Printed when `taller` runs without a subcommand
#[derive(Debug, Serialize)]
pub struct WelcomeViewModel {
    pub shell_title: String,
    pub screen_count: usize,
    pub config_path: String,
    pub config_exists: bool,
}

impl fmt::Display for WelcomeViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", WelcomeView::new(self))
    }
}
