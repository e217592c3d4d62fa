//! # Presentation Layer
//!
//! Handlers never print directly. Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts; the JSON output is exactly
//!   these structs wrapped in `CommandResultViewModel`.
//! * `presenters/`: pure functions from screens, records and config to view
//!   models (lookup resolution, totals, follow-up hints).
//! * `views/`: `fmt::Display` layouts for plain output.
//! * `renderers/`: stdout rendering (`console.rs`) and the interactive
//!   ratatui console (`tui/`), which drives a `Console` directly.
//! * `formatters/`: small text helpers shared by the views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
