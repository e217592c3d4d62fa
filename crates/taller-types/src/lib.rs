pub mod entity;
pub mod error;
pub mod record;
pub mod schema;

pub use entity::EntityKind;
pub use error::{Error, Result};
pub use record::{FieldValue, Fields, LineItem, Record, RecordId};
pub use schema::{
    ColumnSource, ColumnSpec, EntitySchema, FieldKind, FieldSpec, LineSectionSpec, LookupEntry,
    LookupList, ScreenMessages,
};
