//! Modal create/edit form bound to one entity schema.
//!
//! `Closed -> Open(Create | Edit(id)) -> submit | cancel -> Closed`. A failed
//! submit keeps the form open with its field errors; the caller closes it
//! once the store has accepted the submission.

use std::collections::BTreeMap;
use std::sync::Arc;

use taller_types::{EntitySchema, FieldValue, Fields, LineItem, Record, RecordId};

use crate::lines::LineItemEditor;
use crate::validation::{ValidationErrors, Validator};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Closed,
    Open {
        mode: FormMode,
        /// Raw input per field key
        values: BTreeMap<String, String>,
        /// One editor per line section key
        lines: BTreeMap<String, LineItemEditor>,
        errors: ValidationErrors,
    },
}

/// Validated form content ready for the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub mode: FormMode,
    pub fields: Fields,
}

#[derive(Debug, Clone)]
pub struct ModalForm {
    schema: Arc<EntitySchema>,
    state: FormState,
}

impl ModalForm {
    pub fn new(schema: Arc<EntitySchema>) -> Self {
        Self {
            schema,
            state: FormState::Closed,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    /// Open empty, with each field at its default
    pub fn open_create(&mut self) {
        let values = self
            .schema
            .fields
            .iter()
            .map(|f| (f.key.to_string(), f.default.to_string()))
            .collect();
        self.open(FormMode::Create, values, |_| Vec::new());
    }

    /// Open pre-filled from `record`
    pub fn open_edit(&mut self, record: &Record) {
        let values = self
            .schema
            .fields
            .iter()
            .map(|f| {
                let raw = record.get(f.key).map(FieldValue::to_input);
                (f.key.to_string(), raw.unwrap_or_default())
            })
            .collect();
        self.open(FormMode::Edit(record.id), values, |key| {
            record.lines(key).to_vec()
        });
    }

    fn open(
        &mut self,
        mode: FormMode,
        values: BTreeMap<String, String>,
        seed_lines: impl Fn(&str) -> Vec<LineItem>,
    ) {
        let lines = self
            .schema
            .sections
            .iter()
            .map(|s| (s.key.to_string(), LineItemEditor::new(seed_lines(s.key))))
            .collect();

        self.state = FormState::Open {
            mode,
            values,
            lines,
            errors: ValidationErrors::new(),
        };
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        match &self.state {
            FormState::Open { values, .. } => values.get(key).map(String::as_str),
            FormState::Closed => None,
        }
    }

    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let spec = self.schema.field_spec(key)?;
        match &mut self.state {
            FormState::Open { values, .. } => {
                values.insert(spec.key.to_string(), value.into());
                Ok(())
            }
            FormState::Closed => Err(Error::NothingOpen),
        }
    }

    pub fn errors(&self) -> Option<&ValidationErrors> {
        match &self.state {
            FormState::Open { errors, .. } => Some(errors),
            FormState::Closed => None,
        }
    }

    pub fn lines(&self, section: &str) -> &[LineItem] {
        match &self.state {
            FormState::Open { lines, .. } => lines.get(section).map(|e| e.items()).unwrap_or(&[]),
            FormState::Closed => &[],
        }
    }

    pub fn add_line(
        &mut self,
        section: &str,
        item_id: Option<RecordId>,
        quantity: i64,
        amount: i64,
    ) -> Result<LineItem> {
        let schema = Arc::clone(&self.schema);
        let spec = schema.section_spec(section)?;
        let editor = self.section_editor(spec.key)?;
        let item = editor.add(item_id, quantity, amount, &spec.catalog)?;
        Ok(item.clone())
    }

    pub fn remove_line(&mut self, section: &str, seq: u32) -> Result<bool> {
        let key = self.schema.section_spec(section)?.key;
        Ok(self.section_editor(key)?.remove(seq))
    }

    fn section_editor(&mut self, key: &str) -> Result<&mut LineItemEditor> {
        match &mut self.state {
            FormState::Open { lines, .. } => Ok(lines.entry(key.to_string()).or_default()),
            FormState::Closed => Err(Error::NothingOpen),
        }
    }

    /// Validate the current input. Field errors are kept on the form; an
    /// empty line section is a business-rule rejection when `require_line_items`.
    pub fn submit(&mut self, validator: &Validator, require_line_items: bool) -> Result<Submission> {
        let schema = Arc::clone(&self.schema);
        let FormState::Open {
            mode,
            values,
            lines,
            errors,
        } = &mut self.state
        else {
            return Err(Error::NothingOpen);
        };

        let mut fields = match validator.validate(&schema, values) {
            Ok(fields) => {
                *errors = ValidationErrors::new();
                fields
            }
            Err(found) => {
                *errors = found.clone();
                return Err(Error::Validation(found));
            }
        };

        for section in &schema.sections {
            let items = lines.get(section.key).map(|e| e.items()).unwrap_or(&[]);
            if require_line_items && items.is_empty() {
                return Err(Error::Rejected(format!(
                    "Agregue al menos un ítem en {}",
                    section.title
                )));
            }
            fields.insert(section.key.to_string(), FieldValue::Lines(items.to_vec()));
        }

        Ok(Submission {
            mode: *mode,
            fields,
        })
    }

    /// Discard input and close
    pub fn close(&mut self) {
        self.state = FormState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taller_types::{EntityKind, FieldSpec, LineSectionSpec, LookupList, ScreenMessages};

    fn schema() -> Arc<EntitySchema> {
        Arc::new(
            EntitySchema::new(
                EntityKind::PurchaseOrders,
                ScreenMessages {
                    created: "Orden de compra agregada",
                    updated: "Orden de compra editada",
                    deleted: "Orden(es) de compra eliminada(s)",
                    confirm_title: "¿Eliminar orden de compra?",
                    confirm_body: "",
                },
            )
            .field(FieldSpec::reference("idProveedor", "Proveedor", "proveedores").required("Seleccione el proveedor"))
            .field(FieldSpec::new("fecha", "Fecha", taller_types::FieldKind::Date).required("Ingrese la fecha"))
            .field(FieldSpec::text("estado", "Estado").with_default("Pendiente"))
            .section(LineSectionSpec {
                key: "repuestos",
                title: "Repuestos",
                item_label: "Repuesto",
                catalog: LookupList::new("repuestos", &[(1, "Pastillas de freno")]),
            }),
        )
    }

    #[test]
    fn test_open_create_uses_defaults() {
        let mut form = ModalForm::new(schema());
        form.open_create();
        assert_eq!(form.mode(), Some(FormMode::Create));
        assert_eq!(form.value("estado"), Some("Pendiente"));
        assert_eq!(form.value("fecha"), Some(""));
    }

    #[test]
    fn test_submit_bundles_line_items() {
        let mut form = ModalForm::new(schema());
        form.open_create();
        form.set_field("idProveedor", "1").unwrap();
        form.set_field("fecha", "2025-09-01").unwrap();
        form.add_line("repuestos", Some(RecordId::new(1)), 4, 20000).unwrap();

        let submission = form.submit(&Validator::new(), true).unwrap();
        let items = submission.fields["repuestos"].as_lines().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].label, "Pastillas de freno");
        assert!(form.is_open());
    }

    #[test]
    fn test_empty_section_is_rejected_only_when_required() {
        let mut form = ModalForm::new(schema());
        form.open_create();
        form.set_field("idProveedor", "1").unwrap();
        form.set_field("fecha", "2025-09-01").unwrap();

        let err = form.submit(&Validator::new(), true).unwrap_err();
        assert!(matches!(err, Error::Rejected(_)));
        assert!(form.submit(&Validator::new(), false).is_ok());
    }

    #[test]
    fn test_validation_errors_stay_on_form() {
        let mut form = ModalForm::new(schema());
        form.open_create();
        let err = form.submit(&Validator::new(), true).unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(
            form.errors().and_then(|e| e.for_field("idProveedor")),
            Some("Seleccione el proveedor")
        );
    }

    #[test]
    fn test_closed_form_refuses_input() {
        let mut form = ModalForm::new(schema());
        assert_eq!(form.set_field("fecha", "x"), Err(Error::NothingOpen));
        assert_eq!(
            form.submit(&Validator::new(), true),
            Err(Error::NothingOpen)
        );
    }

    #[test]
    fn test_unknown_field_is_schema_error() {
        let mut form = ModalForm::new(schema());
        form.open_create();
        assert!(matches!(form.set_field("color", "rojo"), Err(Error::Schema(_))));
    }
}
