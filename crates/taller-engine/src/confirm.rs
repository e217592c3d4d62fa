use taller_types::RecordId;

/// Blocking yes/no dialog gating a delete
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ConfirmPrompt {
    #[default]
    Hidden,
    Pending {
        ids: Vec<RecordId>,
        title: String,
        body: String,
    },
}

impl ConfirmPrompt {
    pub fn pending(ids: Vec<RecordId>, title: &str, body: &str) -> Self {
        ConfirmPrompt::Pending {
            ids,
            title: title.to_string(),
            body: body.to_string(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ConfirmPrompt::Pending { .. })
    }

    /// Number of records the prompt targets
    pub fn count(&self) -> usize {
        match self {
            ConfirmPrompt::Hidden => 0,
            ConfirmPrompt::Pending { ids, .. } => ids.len(),
        }
    }

    /// Close the prompt, handing back the targeted ids
    pub fn take(&mut self) -> Option<Vec<RecordId>> {
        match std::mem::take(self) {
            ConfirmPrompt::Hidden => None,
            ConfirmPrompt::Pending { ids, .. } => Some(ids),
        }
    }
}
