use serde::Serialize;
use std::fmt;

use crate::presentation::views::{
    DeleteResultView, MutationView, RecordDetailView, RecordTableView, ValidationFailureView,
};

// --------------------------------------------------------
// Table
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecordTableViewModel {
    pub screen: String,
    pub title: String,
    pub columns: Vec<String>,
    pub rows: Vec<RecordRowViewModel>,
    pub page: usize,
    pub total_pages: usize,
    pub total_records: usize,
}

#[derive(Debug, Serialize)]
pub struct RecordRowViewModel {
    pub id: u32,
    pub cells: Vec<String>,
}

impl fmt::Display for RecordTableViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RecordTableView::new(self))
    }
}

// --------------------------------------------------------
// Detail
// --------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct RecordDetailViewModel {
    pub screen: String,
    pub title: String,
    pub id: u32,
    pub fields: Vec<FieldEntryViewModel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<LineSectionViewModel>,
}

#[derive(Debug, Serialize)]
pub struct FieldEntryViewModel {
    pub key: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct LineSectionViewModel {
    pub key: String,
    pub title: String,
    pub item_label: String,
    pub items: Vec<LineItemViewModel>,
    pub total: i64,
}

#[derive(Debug, Serialize)]
pub struct LineItemViewModel {
    pub seq: u32,
    pub item_id: u32,
    pub item: String,
    pub quantity: i64,
    pub amount: i64,
}

impl fmt::Display for RecordDetailViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RecordDetailView::new(self))
    }
}

// --------------------------------------------------------
// Mutations
// --------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MutationKind {
    Created,
    Updated,
}

#[derive(Debug, Serialize)]
pub struct MutationViewModel {
    pub action: MutationKind,
    pub record: RecordDetailViewModel,
}

impl fmt::Display for MutationViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", MutationView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResultViewModel {
    pub screen: String,
    pub confirmed: bool,
    pub requested: Vec<u32>,
    /// Requested ids that were not in the list
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<u32>,
    pub removed: usize,
    pub remaining: usize,
}

impl fmt::Display for DeleteResultViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", DeleteResultView::new(self))
    }
}

#[derive(Debug, Serialize)]
pub struct ValidationFailureViewModel {
    pub screen: String,
    pub title: String,
    pub errors: Vec<FieldErrorViewModel>,
    /// Business-rule rejection, shown as a notice rather than per field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejection: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FieldErrorViewModel {
    pub field: String,
    pub label: String,
    pub message: String,
}

impl fmt::Display for ValidationFailureViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", ValidationFailureView::new(self))
    }
}
