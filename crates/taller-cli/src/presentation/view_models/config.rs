use serde::Serialize;
use std::fmt;

use crate::presentation::views::{ConfigInitView, ConfigView};

#[derive(Debug, Serialize)]
pub struct ConfigViewModel {
    pub path: String,
    pub exists: bool,
    pub page_size: usize,
    pub selection_mode: String,
    pub require_line_items: bool,
    pub check_references: bool,
}

impl fmt::Display for ConfigViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigInitViewModel {
    pub path: String,
    pub overwritten: bool,
    pub toml: String,
}

impl fmt::Display for ConfigInitViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ConfigInitView::new(self))
    }
}
