use taller_types::{LineItem, LookupList, RecordId};

use crate::validation::ValidationErrors;

/// Editable copy of one line section while the parent form is open.
///
/// Every change builds a new list; the parent submit takes the current one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemEditor {
    items: Vec<LineItem>,
}

impl LineItemEditor {
    pub fn new(items: Vec<LineItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item under the next local sequence id.
    /// The label is looked up in `catalog` and left empty when unknown.
    pub fn add(
        &mut self,
        item_id: Option<RecordId>,
        quantity: i64,
        amount: i64,
        catalog: &LookupList,
    ) -> Result<&LineItem, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if item_id.is_none() {
            errors.push("item", "Seleccione un ítem");
        }
        if quantity < 1 {
            errors.push("quantity", "La cantidad debe ser al menos 1");
        }
        if amount < 0 {
            errors.push("amount", "El importe no puede ser negativo");
        }

        let item_id = match item_id {
            Some(id) if errors.is_empty() => id,
            _ => return Err(errors),
        };

        let seq = self.items.iter().map(|i| i.seq).max().unwrap_or(0) + 1;
        let item = LineItem {
            seq,
            item_id,
            label: catalog.label_of(item_id).unwrap_or_default().to_string(),
            quantity,
            amount,
        };

        let mut next = self.items.clone();
        next.push(item);
        self.items = next;

        Ok(&self.items[self.items.len() - 1])
    }

    /// Filter out the item with `seq`; returns whether one was removed
    pub fn remove(&mut self, seq: u32) -> bool {
        let before = self.items.len();
        self.items = self
            .items
            .iter()
            .filter(|i| i.seq != seq)
            .cloned()
            .collect();
        self.items.len() != before
    }

    pub fn into_items(self) -> Vec<LineItem> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> LookupList {
        LookupList::new(
            "repuestos",
            &[(1, "Pastillas de freno"), (2, "Pastillas"), (3, "Amortiguadores")],
        )
    }

    #[test]
    fn test_add_assigns_next_seq_and_label() {
        let mut editor = LineItemEditor::default();
        editor
            .add(Some(RecordId::new(2)), 4, 20000, &catalog())
            .unwrap();
        let item = editor
            .add(Some(RecordId::new(3)), 2, 30000, &catalog())
            .unwrap();
        assert_eq!(item.seq, 2);
        assert_eq!(item.label, "Amortiguadores");
    }

    #[test]
    fn test_seq_follows_max_after_removal() {
        let mut editor = LineItemEditor::default();
        for _ in 0..3 {
            editor.add(Some(RecordId::new(1)), 1, 0, &catalog()).unwrap();
        }
        assert!(editor.remove(2));
        assert!(!editor.remove(2));
        let item = editor.add(Some(RecordId::new(1)), 1, 0, &catalog()).unwrap();
        assert_eq!(item.seq, 4);
    }

    #[test]
    fn test_unknown_catalog_item_gets_empty_label() {
        let mut editor = LineItemEditor::default();
        let item = editor.add(Some(RecordId::new(99)), 1, 10, &catalog()).unwrap();
        assert_eq!(item.label, "");
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut editor = LineItemEditor::default();
        let errors = editor.add(None, 0, -1, &catalog()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(editor.is_empty());
    }
}
