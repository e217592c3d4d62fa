//! Field-level validation of raw form input.
//!
//! Every field is checked on its own: required, email shape, integers,
//! non-negative amounts, dates, times and choice membership. Foreign keys are
//! only checked against their lookup list when reference checking is enabled.

use chrono::{NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use taller_types::{EntitySchema, FieldKind, FieldSpec, FieldValue, Fields, RecordId};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Inline messages keyed by field, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    check_references: bool,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reference_check(mut self, enabled: bool) -> Self {
        self.check_references = enabled;
        self
    }

    /// Validate every schema field from raw input. Fields missing from
    /// `values` are treated as empty.
    pub fn validate(
        &self,
        schema: &EntitySchema,
        values: &BTreeMap<String, String>,
    ) -> Result<Fields, ValidationErrors> {
        let mut fields = Fields::new();
        let mut errors = ValidationErrors::new();

        for spec in &schema.fields {
            let raw = values.get(spec.key).map(String::as_str).unwrap_or("");
            match self.parse_field(schema, spec, raw) {
                Ok(Some(value)) => {
                    fields.insert(spec.key.to_string(), value);
                }
                Ok(None) => {}
                Err(message) => errors.push(spec.key, message),
            }
        }

        if errors.is_empty() {
            Ok(fields)
        } else {
            Err(errors)
        }
    }

    /// Parse one raw value. `Ok(None)` means an optional field left empty.
    ///
    /// Plain text is stored exactly as typed; trimming only decides
    /// emptiness and feeds the typed parsers.
    pub fn parse_field(
        &self,
        schema: &EntitySchema,
        spec: &FieldSpec,
        raw: &str,
    ) -> Result<Option<FieldValue>, String> {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            if spec.required {
                return Err(message_for(spec, "Este campo es obligatorio"));
            }
            return Ok(match spec.kind {
                FieldKind::Text => Some(FieldValue::text(raw)),
                FieldKind::Email => Some(FieldValue::text("")),
                _ => None,
            });
        }

        let value = match spec.kind {
            FieldKind::Text => FieldValue::text(raw),
            FieldKind::Email => {
                if !EMAIL_RE.is_match(trimmed) {
                    return Err(message_for(spec, "Ingrese un email válido"));
                }
                FieldValue::text(trimmed)
            }
            FieldKind::Integer => trimmed
                .parse::<i64>()
                .map(FieldValue::Integer)
                .map_err(|_| message_for(spec, "Ingrese un número entero"))?,
            FieldKind::Amount => match trimmed.parse::<i64>() {
                Ok(n) if n >= 0 => FieldValue::Integer(n),
                _ => return Err(message_for(spec, "Ingrese un importe válido")),
            },
            FieldKind::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .map(|d| FieldValue::text(d.format("%Y-%m-%d").to_string()))
                .map_err(|_| message_for(spec, "Ingrese una fecha (AAAA-MM-DD)"))?,
            FieldKind::Time => NaiveTime::parse_from_str(trimmed, "%H:%M")
                .map(|t| FieldValue::text(t.format("%H:%M").to_string()))
                .map_err(|_| message_for(spec, "Ingrese una hora (HH:MM)"))?,
            FieldKind::Choice { options } => options
                .iter()
                .find(|o| o.eq_ignore_ascii_case(trimmed))
                .map(|o| FieldValue::text(*o))
                .ok_or_else(|| message_for(spec, "Seleccione una opción válida"))?,
            FieldKind::Reference { lookup } => {
                let id = trimmed
                    .parse::<RecordId>()
                    .map_err(|_| message_for(spec, "Seleccione un valor de la lista"))?;
                if self.check_references
                    && let Some(list) = schema.lookup_list(lookup)
                    && !list.contains(id)
                {
                    return Err(format!("No existe {} con id {}", spec.label, id));
                }
                FieldValue::Reference(id)
            }
        };

        Ok(Some(value))
    }
}

fn message_for(spec: &FieldSpec, fallback: &str) -> String {
    spec.message.unwrap_or(fallback).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use taller_types::{EntityKind, LookupList, ScreenMessages};

    fn schema() -> EntitySchema {
        EntitySchema::new(
            EntityKind::Suppliers,
            ScreenMessages {
                created: "",
                updated: "",
                deleted: "",
                confirm_title: "",
                confirm_body: "",
            },
        )
        .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
        .field(
            FieldSpec::new("email", "Email", FieldKind::Email).required("Ingrese un email válido"),
        )
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date))
        .field(FieldSpec::new("hora", "Hora", FieldKind::Time))
        .field(FieldSpec::new("total", "Total", FieldKind::Amount))
        .field(FieldSpec::new(
            "estado",
            "Estado",
            FieldKind::Choice {
                options: &["Pendiente", "Completado"],
            },
        ))
        .field(FieldSpec::reference("idCalle", "Calle", "calles"))
        .lookup(LookupList::new("calles", &[(1, "San Martin")]))
    }

    fn input(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_field_uses_schema_message() {
        let errors = Validator::new()
            .validate(&schema(), &input(&[("email", "a@b.com")]))
            .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.for_field("nombre"), Some("Ingrese el nombre"));
    }

    #[test]
    fn test_email_shape() {
        let errors = Validator::new()
            .validate(&schema(), &input(&[("nombre", "X"), ("email", "nope")]))
            .unwrap_err();
        assert_eq!(errors.for_field("email"), Some("Ingrese un email válido"));
    }

    #[test]
    fn test_typed_fields_are_normalized() {
        let fields = Validator::new()
            .validate(
                &schema(),
                &input(&[
                    ("nombre", " Casa 3 "),
                    ("email", "c3@example.com"),
                    ("fecha", "2025-09-01"),
                    ("hora", "9:05"),
                    ("total", "1500"),
                    ("estado", "pendiente"),
                    ("idCalle", "1"),
                ]),
            )
            .unwrap();

        assert_eq!(fields["nombre"], FieldValue::text(" Casa 3 "));
        assert_eq!(fields["hora"], FieldValue::text("09:05"));
        assert_eq!(fields["total"], FieldValue::Integer(1500));
        assert_eq!(fields["estado"], FieldValue::text("Pendiente"));
        assert_eq!(fields["idCalle"], FieldValue::reference(1));
    }

    #[test]
    fn test_negative_amount_and_bad_date_rejected() {
        let errors = Validator::new()
            .validate(
                &schema(),
                &input(&[
                    ("nombre", "X"),
                    ("email", "x@y.io"),
                    ("total", "-3"),
                    ("fecha", "2025-13-01"),
                ]),
            )
            .unwrap_err();
        assert_eq!(errors.for_field("total"), Some("Ingrese un importe válido"));
        assert_eq!(
            errors.for_field("fecha"),
            Some("Ingrese una fecha (AAAA-MM-DD)")
        );
    }

    #[test]
    fn test_optional_fields_left_empty() {
        let fields = Validator::new()
            .validate(&schema(), &input(&[("nombre", "X"), ("email", "x@y.io")]))
            .unwrap();
        assert!(!fields.contains_key("total"));
        assert!(!fields.contains_key("idCalle"));
    }

    #[test]
    fn test_dangling_reference_only_checked_when_enabled() {
        let values = input(&[("nombre", "X"), ("email", "x@y.io"), ("idCalle", "42")]);

        assert!(Validator::new().validate(&schema(), &values).is_ok());

        let errors = Validator::new()
            .with_reference_check(true)
            .validate(&schema(), &values)
            .unwrap_err();
        assert_eq!(errors.for_field("idCalle"), Some("No existe Calle con id 42"));
    }
}
