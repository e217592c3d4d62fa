pub mod config;
pub mod dashboard;
pub mod record;
pub mod screen;

pub use config::{ConfigInitView, ConfigView};
pub use dashboard::DashboardView;
pub use record::{
    DeleteResultView, MutationView, RecordDetailView, RecordTableView, ValidationFailureView,
};
pub use screen::{ScreenListView, WelcomeView};
