pub mod common;
pub mod config;
pub mod dashboard;
pub mod record;
pub mod result;
pub mod screen;

pub use common::{Guidance, StatusBadge, StatusLevel};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use dashboard::{DashboardCardViewModel, DashboardViewModel};
pub use record::{
    DeleteResultViewModel, FieldEntryViewModel, FieldErrorViewModel, LineItemViewModel,
    LineSectionViewModel, MutationKind, MutationViewModel, RecordDetailViewModel,
    RecordRowViewModel, RecordTableViewModel, ValidationFailureViewModel,
};
pub use result::CommandResultViewModel;
pub use screen::{ScreenEntryViewModel, ScreenListViewModel, WelcomeViewModel};
