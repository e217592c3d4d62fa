pub mod config;
pub mod console;
pub mod dashboard;
pub mod delete;
pub mod form;
pub mod list;
pub mod screens;
pub mod show;
