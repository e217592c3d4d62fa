use std::collections::BTreeSet;

use taller_catalog::{all_schemas, schema, seed};
use taller_types::{EntityKind, FieldKind, RecordId};

#[test]
fn test_every_screen_has_a_matching_schema() {
    let schemas = all_schemas();
    assert_eq!(schemas.len(), EntityKind::ALL.len());
    for (kind, schema) in EntityKind::ALL.iter().zip(&schemas) {
        assert_eq!(schema.kind, *kind);
        assert!(!schema.fields.is_empty(), "{} has no fields", kind);
    }
}

#[test]
fn test_seed_ids_are_unique() {
    for kind in EntityKind::ALL {
        let records = seed(kind);
        let ids: BTreeSet<RecordId> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids.len(), records.len(), "duplicate ids in {}", kind);
    }
}

#[test]
fn test_seed_records_only_use_known_keys_and_fill_required() {
    for kind in EntityKind::ALL {
        let schema = schema(kind);
        for record in seed(kind) {
            for key in record.fields.keys() {
                let known = schema.field_spec(key).is_ok() || schema.section_spec(key).is_ok();
                assert!(known, "{} seed {} has unknown key {}", kind, record.id, key);
            }
            assert!(
                schema.missing_required(&record.fields).is_empty(),
                "{} seed {} misses required fields",
                kind,
                record.id
            );
        }
    }
}

#[test]
fn test_reference_fields_name_an_existing_lookup() {
    for schema in all_schemas() {
        for field in &schema.fields {
            if let FieldKind::Reference { lookup } = field.kind {
                assert!(
                    schema.lookup_list(lookup).is_some(),
                    "{}.{} points at missing lookup {}",
                    schema.kind,
                    field.key,
                    lookup
                );
            }
        }
    }
}

#[test]
fn test_streets_seed() {
    let streets = seed(EntityKind::Streets);
    assert_eq!(streets.len(), 10);
    assert_eq!(streets[0].text("nombre"), Some("San Martin"));
    assert_eq!(streets[9].text("nombre"), Some("Encina"));
}

#[test]
fn test_composite_screens() {
    let composites: Vec<EntityKind> = all_schemas()
        .iter()
        .filter(|s| s.is_composite())
        .map(|s| s.kind)
        .collect();
    assert_eq!(
        composites,
        vec![EntityKind::PurchaseOrders, EntityKind::WorkOrders]
    );

    let order = &seed(EntityKind::PurchaseOrders)[0];
    let seqs: Vec<u32> = order.lines("repuestos").iter().map(|l| l.seq).collect();
    assert_eq!(seqs, vec![1, 2]);
}

#[test]
fn test_table_cells_resolve_labels() {
    let schema = schema(EntityKind::Appointments);
    let first = &seed(EntityKind::Appointments)[0];
    assert_eq!(
        schema.cells(first),
        vec!["1", "Juan Pérez", "Ford Fiesta (XYZ789)", "2025-08-21", "10:00", "Pendiente"]
    );

    let work_orders = schema_cells(EntityKind::WorkOrders);
    assert_eq!(work_orders.last().map(String::as_str), Some("1"));
}

fn schema_cells(kind: EntityKind) -> Vec<String> {
    schema(kind).cells(&seed(kind)[0])
}
