use std::fmt;

use crate::presentation::formatters::text::{column_widths, table_row};
use crate::presentation::view_models::{ScreenListViewModel, WelcomeViewModel};

pub struct ScreenListView<'a> {
    data: &'a ScreenListViewModel,
}

impl<'a> ScreenListView<'a> {
    pub fn new(data: &'a ScreenListViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ScreenListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.shell_title)?;
        writeln!(f)?;

        let headers = vec!["PATH".to_string(), "TITLE".to_string()];
        let rows: Vec<Vec<String>> = self
            .data
            .screens
            .iter()
            .map(|s| {
                let title = if s.composite {
                    format!("{} (with items)", s.title)
                } else {
                    s.title.clone()
                };
                vec![s.path.clone(), title]
            })
            .collect();
        let widths = column_widths(&headers, &rows, None);

        writeln!(f, "{}", table_row(&headers, &widths))?;
        for row in &rows {
            writeln!(f, "{}", table_row(row, &widths))?;
        }
        Ok(())
    }
}

pub struct WelcomeView<'a> {
    data: &'a WelcomeViewModel,
}

impl<'a> WelcomeView<'a> {
    pub fn new(data: &'a WelcomeViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for WelcomeView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.shell_title)?;
        writeln!(f)?;
        writeln!(f, "{} screens available.", self.data.screen_count)?;
        if self.data.config_exists {
            writeln!(f, "Config: {}", self.data.config_path)?;
        } else {
            writeln!(f, "Config: {} (not found, using defaults)", self.data.config_path)?;
        }
        Ok(())
    }
}
