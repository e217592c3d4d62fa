pub mod config;
pub mod console;
pub mod dashboard;
pub mod error;
pub mod nav;
pub mod workspace;

pub use config::{Config, FormsConfig, ListConfig, SelectionConfig, resolve_config_path};
pub use console::Console;
pub use dashboard::{Dashboard, DashboardCard};
pub use error::{Error, Result};
pub use nav::{Route, SHELL_TITLE, routes};
pub use workspace::{Workspace, find_record};
