//! Declarative description of one entity screen: fields, columns, nested line
//! sections and the static lookup lists its foreign keys resolve against.

use serde::Serialize;

use crate::{EntityKind, Error, FieldValue, Fields, Record, RecordId, Result};

/// Input kind of a form field, which also decides its validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Integer,
    /// Non-negative integer amount (prices, totals)
    Amount,
    /// `YYYY-MM-DD`
    Date,
    /// `HH:MM`
    Time,
    Choice {
        options: &'static [&'static str],
    },
    /// Foreign key into the named lookup list
    Reference {
        lookup: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Inline message shown when the field is missing or malformed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    /// Value the create form starts with
    #[serde(skip_serializing_if = "str::is_empty")]
    pub default: &'static str,
}

impl FieldSpec {
    pub fn new(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            key,
            label,
            kind,
            required: false,
            message: None,
            default: "",
        }
    }

    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn reference(key: &'static str, label: &'static str, lookup: &'static str) -> Self {
        Self::new(key, label, FieldKind::Reference { lookup })
    }

    pub fn required(mut self, message: &'static str) -> Self {
        self.required = true;
        self.message = Some(message);
        self
    }

    pub fn with_default(mut self, default: &'static str) -> Self {
        self.default = default;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupEntry {
    pub id: RecordId,
    pub label: &'static str,
}

/// Small static reference list (streets, brands, suppliers, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupList {
    pub name: &'static str,
    pub entries: Vec<LookupEntry>,
}

impl LookupList {
    pub fn new(name: &'static str, entries: &[(u32, &'static str)]) -> Self {
        Self {
            name,
            entries: entries
                .iter()
                .map(|&(id, label)| LookupEntry {
                    id: RecordId::new(id),
                    label,
                })
                .collect(),
        }
    }

    pub fn label_of(&self, id: RecordId) -> Option<&'static str> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.label)
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

/// Nested list of line items hosted by a composite entity's form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineSectionSpec {
    pub key: &'static str,
    pub title: &'static str,
    /// Column heading for the catalog item
    pub item_label: &'static str,
    pub catalog: LookupList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "key", rename_all = "snake_case")]
pub enum ColumnSource {
    Id,
    Field(&'static str),
    /// Number of items in a line section
    LineCount(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnSpec {
    pub title: &'static str,
    pub source: ColumnSource,
}

impl ColumnSpec {
    pub fn id() -> Self {
        Self {
            title: "ID",
            source: ColumnSource::Id,
        }
    }

    pub fn field(title: &'static str, key: &'static str) -> Self {
        Self {
            title,
            source: ColumnSource::Field(key),
        }
    }

    pub fn line_count(title: &'static str, section: &'static str) -> Self {
        Self {
            title,
            source: ColumnSource::LineCount(section),
        }
    }
}

/// Per-screen wording for notices and the delete confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScreenMessages {
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
    pub confirm_title: &'static str,
    pub confirm_body: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub fields: Vec<FieldSpec>,
    pub sections: Vec<LineSectionSpec>,
    pub lookups: Vec<LookupList>,
    pub messages: ScreenMessages,
    columns: Vec<ColumnSpec>,
}

impl EntitySchema {
    pub fn new(kind: EntityKind, messages: ScreenMessages) -> Self {
        Self {
            kind,
            fields: Vec::new(),
            sections: Vec::new(),
            lookups: Vec::new(),
            messages,
            columns: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn section(mut self, section: LineSectionSpec) -> Self {
        self.sections.push(section);
        self
    }

    pub fn lookup(mut self, lookup: LookupList) -> Self {
        self.lookups.push(lookup);
        self
    }

    pub fn with_columns(mut self, columns: Vec<ColumnSpec>) -> Self {
        self.columns = columns;
        self
    }

    /// Table columns; defaults to the id followed by every field
    pub fn columns(&self) -> Vec<ColumnSpec> {
        if !self.columns.is_empty() {
            return self.columns.clone();
        }

        std::iter::once(ColumnSpec::id())
            .chain(self.fields.iter().map(|f| ColumnSpec::field(f.label, f.key)))
            .chain(
                self.sections
                    .iter()
                    .map(|s| ColumnSpec::line_count(s.title, s.key)),
            )
            .collect()
    }

    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    pub fn is_composite(&self) -> bool {
        !self.sections.is_empty()
    }

    pub fn field_spec(&self, key: &str) -> Result<&FieldSpec> {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .ok_or_else(|| Error::UnknownField {
                entity: self.kind.path().to_string(),
                field: key.to_string(),
            })
    }

    pub fn section_spec(&self, key: &str) -> Result<&LineSectionSpec> {
        self.sections
            .iter()
            .find(|s| s.key == key)
            .ok_or_else(|| Error::UnknownSection {
                entity: self.kind.path().to_string(),
                section: key.to_string(),
            })
    }

    pub fn lookup_list(&self, name: &str) -> Option<&LookupList> {
        self.lookups.iter().find(|l| l.name == name)
    }

    /// Required fields absent from `fields`
    pub fn missing_required<'a>(&'a self, fields: &Fields) -> Vec<&'a FieldSpec> {
        self.fields
            .iter()
            .filter(|spec| spec.required)
            .filter(|spec| match fields.get(spec.key) {
                None => true,
                Some(FieldValue::Text(s)) => s.trim().is_empty(),
                Some(_) => false,
            })
            .collect()
    }

    /// Display label for a field value, resolving foreign keys.
    /// Unknown references render as `#<id>`.
    pub fn display_value(&self, key: &str, value: &FieldValue) -> String {
        let lookup = self
            .fields
            .iter()
            .find(|f| f.key == key)
            .and_then(|spec| match spec.kind {
                FieldKind::Reference { lookup } => self.lookup_list(lookup),
                _ => None,
            });

        match (value, lookup) {
            (FieldValue::Reference(id), Some(list)) => list
                .label_of(*id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("#{}", id)),
            (FieldValue::Reference(id), None) => format!("#{}", id),
            (other, _) => other.to_input(),
        }
    }

    /// Table cells of `record`, one per column
    pub fn cells(&self, record: &Record) -> Vec<String> {
        self.columns()
            .iter()
            .map(|column| match column.source {
                ColumnSource::Id => record.id.to_string(),
                ColumnSource::Field(key) => record
                    .get(key)
                    .map(|v| self.display_value(key, v))
                    .unwrap_or_default(),
                ColumnSource::LineCount(section) => record.lines(section).len().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> ScreenMessages {
        ScreenMessages {
            created: "Auto agregado",
            updated: "Auto editado",
            deleted: "Auto(s) eliminado(s)",
            confirm_title: "¿Eliminar auto(s)?",
            confirm_body: "¿Estás seguro?",
        }
    }

    fn schema() -> EntitySchema {
        EntitySchema::new(EntityKind::Vehicles, messages())
            .field(FieldSpec::reference("idCliente", "Cliente", "clientes").required("Ingrese el cliente"))
            .field(FieldSpec::text("patente", "Patente").required("Ingrese la patente"))
            .field(FieldSpec::text("observacion", "Observacion"))
            .lookup(LookupList::new("clientes", &[(1, "Juan Pérez")]))
    }

    #[test]
    fn test_default_columns_follow_fields() {
        let titles: Vec<_> = schema().columns().iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["ID", "Cliente", "Patente", "Observacion"]);
    }

    #[test]
    fn test_missing_required_treats_blank_text_as_missing() {
        let mut fields = Fields::new();
        fields.insert("patente".to_string(), FieldValue::text("   "));
        let missing: Vec<_> = schema()
            .missing_required(&fields)
            .iter()
            .map(|f| f.key)
            .collect();
        assert_eq!(missing, vec!["idCliente", "patente"]);
    }

    #[test]
    fn test_display_value_resolves_and_falls_back() {
        let schema = schema();
        assert_eq!(
            schema.display_value("idCliente", &FieldValue::reference(1)),
            "Juan Pérez"
        );
        assert_eq!(
            schema.display_value("idCliente", &FieldValue::reference(9)),
            "#9"
        );
    }

    #[test]
    fn test_cells_resolve_lookups() {
        let mut fields = Fields::new();
        fields.insert("idCliente".to_string(), FieldValue::reference(1));
        fields.insert("patente".to_string(), FieldValue::text("ABC123"));
        let record = Record::new(RecordId::new(3), fields);

        assert_eq!(schema().cells(&record), vec!["3", "Juan Pérez", "ABC123", ""]);
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let err = schema().field_spec("color").unwrap_err();
        assert_eq!(err.to_string(), "Unknown field 'color' for autos");
    }
}
