use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use taller_types::RecordId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionMode {
    /// At most one row; picking another row replaces it
    #[default]
    Single,
    /// Rows toggle in and out of a set
    Multiple,
}

/// Ids of the selected rows of one list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    mode: SelectionMode,
    ids: BTreeSet<RecordId>,
}

impl Selection {
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            ids: BTreeSet::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Row click. In single mode re-selecting the current row keeps it.
    pub fn select(&mut self, id: RecordId) {
        match self.mode {
            SelectionMode::Single => {
                self.ids.clear();
                self.ids.insert(id);
            }
            SelectionMode::Multiple => {
                if !self.ids.remove(&id) {
                    self.ids.insert(id);
                }
            }
        }
    }

    /// Checkbox toggle. Single mode has no checkboxes, so it acts as `select`.
    pub fn toggle(&mut self, id: RecordId) {
        if self.mode == SelectionMode::Single {
            self.select(id);
        } else if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.ids.iter().copied().collect()
    }

    /// The selected id when exactly one row is selected
    pub fn single(&self) -> Option<RecordId> {
        if self.ids.len() == 1 {
            self.ids.iter().next().copied()
        } else {
            None
        }
    }

    pub fn can_edit(&self) -> bool {
        self.ids.len() == 1
    }

    pub fn can_delete(&self) -> bool {
        !self.ids.is_empty()
    }
}
