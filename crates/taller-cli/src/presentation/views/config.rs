use std::fmt;

use crate::presentation::view_models::{ConfigInitViewModel, ConfigViewModel};

pub struct ConfigView<'a> {
    data: &'a ConfigViewModel,
}

impl<'a> ConfigView<'a> {
    pub fn new(data: &'a ConfigViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.data.exists {
            writeln!(f, "Config file: {}", self.data.path)?;
        } else {
            writeln!(f, "Config file: {} (not found, defaults)", self.data.path)?;
        }
        writeln!(f)?;
        writeln!(f, "list.page_size             {}", self.data.page_size)?;
        writeln!(f, "selection.mode             {}", self.data.selection_mode)?;
        writeln!(f, "forms.require_line_items   {}", self.data.require_line_items)?;
        writeln!(f, "forms.check_references     {}", self.data.check_references)?;
        Ok(())
    }
}

pub struct ConfigInitView<'a> {
    data: &'a ConfigInitViewModel,
}

impl<'a> ConfigInitView<'a> {
    pub fn new(data: &'a ConfigInitViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ConfigInitView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.data.path)?;
        writeln!(f)?;
        write!(f, "{}", self.data.toml)
    }
}
