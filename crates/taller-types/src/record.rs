use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Row key of a record, unique within its entity list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(u32);

impl RecordId {
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> u32 {
        self.0
    }

    /// Next id after the largest one in `ids`, or 1 for an empty list
    pub fn next_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = RecordId>,
    {
        ids.into_iter()
            .max()
            .map(|max| Self(max.0 + 1))
            .unwrap_or(Self(1))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for RecordId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::str::FromStr for RecordId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

/// One catalog item inside a composite record (purchase order, work order)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    /// Sequence id, local to the section the item lives in
    pub seq: u32,
    pub item_id: RecordId,
    /// Catalog label captured when the item was added
    pub label: String,
    pub quantity: i64,
    pub amount: i64,
}

/// Value of a single record field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
    Reference(RecordId),
    Lines(Vec<LineItem>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn reference(id: u32) -> Self {
        FieldValue::Reference(RecordId::new(id))
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_reference(&self) -> Option<RecordId> {
        match self {
            FieldValue::Reference(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_lines(&self) -> Option<&[LineItem]> {
        match self {
            FieldValue::Lines(items) => Some(items),
            _ => None,
        }
    }

    /// Raw text a form input would hold for this value
    pub fn to_input(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Integer(n) => n.to_string(),
            FieldValue::Reference(id) => id.to_string(),
            FieldValue::Lines(items) => items.len().to_string(),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_input())
    }
}

/// Field name to value mapping (id excluded)
pub type Fields = BTreeMap<String, FieldValue>;

/// One row of an entity list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(flatten)]
    pub fields: Fields,
}

impl Record {
    pub fn new(id: RecordId, fields: Fields) -> Self {
        Self { id, fields }
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    pub fn integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(FieldValue::as_integer)
    }

    pub fn lines(&self, key: &str) -> &[LineItem] {
        self.get(key).and_then(FieldValue::as_lines).unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_id_empty_list_starts_at_one() {
        assert_eq!(RecordId::next_after(Vec::new()), RecordId::new(1));
    }

    #[test]
    fn test_next_id_uses_max_not_len() {
        let ids = [1, 7, 3].into_iter().map(RecordId::new);
        assert_eq!(RecordId::next_after(ids), RecordId::new(8));
    }

    #[test]
    fn test_record_serializes_flat() {
        let mut fields = Fields::new();
        fields.insert("nombre".to_string(), FieldValue::text("Lavalle"));
        let record = Record::new(RecordId::new(11), fields);

        insta::assert_json_snapshot!(record, @r#"
        {
          "id": 11,
          "nombre": "Lavalle"
        }
        "#);
    }

    #[test]
    fn test_reference_serializes_as_integer() {
        let value = serde_json::to_value(FieldValue::reference(3)).unwrap();
        assert_eq!(value, serde_json::json!(3));
    }
}
