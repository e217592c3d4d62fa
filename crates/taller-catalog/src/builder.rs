use taller_types::{FieldValue, Fields, LineItem, Record, RecordId, ScreenMessages};

/// Seed record builder
pub(crate) struct RecordBuilder {
    id: u32,
    fields: Fields,
}

impl RecordBuilder {
    pub(crate) fn new(id: u32) -> Self {
        Self {
            id,
            fields: Fields::new(),
        }
    }

    pub(crate) fn text(mut self, key: &str, value: &str) -> Self {
        self.fields.insert(key.to_string(), FieldValue::text(value));
        self
    }

    pub(crate) fn integer(mut self, key: &str, value: i64) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Integer(value));
        self
    }

    pub(crate) fn reference(mut self, key: &str, id: u32) -> Self {
        self.fields.insert(key.to_string(), FieldValue::reference(id));
        self
    }

    pub(crate) fn lines(mut self, key: &str, items: Vec<LineItem>) -> Self {
        self.fields.insert(key.to_string(), FieldValue::Lines(items));
        self
    }

    pub(crate) fn build(self) -> Record {
        Record::new(RecordId::new(self.id), self.fields)
    }
}

pub(crate) fn line(seq: u32, item_id: u32, label: &str, quantity: i64, amount: i64) -> LineItem {
    LineItem {
        seq,
        item_id: RecordId::new(item_id),
        label: label.to_string(),
        quantity,
        amount,
    }
}

pub(crate) const fn messages(
    created: &'static str,
    updated: &'static str,
    deleted: &'static str,
    confirm_title: &'static str,
    confirm_body: &'static str,
) -> ScreenMessages {
    ScreenMessages {
        created,
        updated,
        deleted,
        confirm_title,
        confirm_body,
    }
}

/// One seed record per name, ids from 1
pub(crate) fn named(key: &str, names: &[&str]) -> Vec<Record> {
    names
        .iter()
        .zip(1..)
        .map(|(name, id)| RecordBuilder::new(id).text(key, name).build())
        .collect()
}
