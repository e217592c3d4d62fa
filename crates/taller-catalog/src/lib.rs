// Per-entity schemas and seed data, grouped by business area
pub mod agenda;
pub mod complaints;
pub mod orders;
pub mod people;
pub mod reference;
pub mod vehicles;
pub mod vouchers;

// Screen registry
pub mod registry;

mod builder;
mod lookups;

pub use registry::{all_schemas, schema, seed};
