//! Navigation shell: the dashboard followed by one route per entity screen.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use taller_types::EntityKind;

pub const SHELL_TITLE: &str = "Taller Mecánico";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Dashboard,
    Screen(EntityKind),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Screen(kind) => kind.path(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Screen(kind) => kind.title(),
        }
    }

    /// Case-insensitive lookup by path; a leading `/` is ignored
    pub fn parse(input: &str) -> taller_types::Result<Self> {
        let trimmed = input.trim().trim_start_matches('/');
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("dashboard") {
            return Ok(Route::Dashboard);
        }
        EntityKind::from_str(trimmed).map(Route::Screen)
    }
}

impl Serialize for Route {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.path())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Every route in sidebar order
pub fn routes() -> Vec<Route> {
    std::iter::once(Route::Dashboard)
        .chain(EntityKind::ALL.iter().map(|&kind| Route::Screen(kind)))
        .collect()
}
