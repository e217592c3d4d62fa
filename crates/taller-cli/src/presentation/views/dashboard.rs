use std::fmt;

use crate::presentation::view_models::DashboardViewModel;

pub struct DashboardView<'a> {
    data: &'a DashboardViewModel,
}

impl<'a> DashboardView<'a> {
    pub fn new(data: &'a DashboardViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DashboardView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.data.date {
            Some(date) => writeln!(f, "{} · {}", self.data.title, date)?,
            None => writeln!(f, "{}", self.data.title)?,
        }
        writeln!(f)?;

        let width = self
            .data
            .cards
            .iter()
            .map(|card| card.title.chars().count())
            .max()
            .unwrap_or(0);
        for card in &self.data.cards {
            writeln!(f, "  {:<width$}  {}", card.title, card.value, width = width)?;
        }
        Ok(())
    }
}
