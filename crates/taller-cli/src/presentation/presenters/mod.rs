pub mod config;
pub mod dashboard;
pub mod record;
pub mod screen;

pub use config::{present_config, present_config_init};
pub use dashboard::{dashboard_view_model, present_dashboard};
pub use record::{
    present_delete, present_line_failure, present_mutation, present_record_detail,
    present_record_table, present_rejection, present_validation_failure, record_detail,
};
pub use screen::{present_screen_list, present_welcome};
