use taller_types::{
    ColumnSpec, EntityKind, EntitySchema, FieldKind, FieldSpec, LookupList, Record,
    ScreenMessages,
};

use crate::builder::{RecordBuilder, messages};
use crate::lookups::{self, ESTADOS_SEGUIMIENTO};

fn complaint_schema(
    kind: EntityKind,
    messages: ScreenMessages,
    party: FieldSpec,
    party_column: &'static str,
    lookup: LookupList,
) -> EntitySchema {
    let party_key = party.key;
    EntitySchema::new(kind, messages)
        .field(party)
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Ingrese la fecha"))
        .field(FieldSpec::text("descripcion", "Descripcion"))
        .field(
            FieldSpec::new(
                "estado",
                "Estado",
                FieldKind::Choice {
                    options: ESTADOS_SEGUIMIENTO,
                },
            )
            .required("Seleccione el estado")
            .with_default("Pendiente"),
        )
        .lookup(lookup)
        .with_columns(vec![
            ColumnSpec::id(),
            ColumnSpec::field(party_column, party_key),
            ColumnSpec::field("Fecha", "fecha"),
            ColumnSpec::field("Descripcion", "descripcion"),
            ColumnSpec::field("Estado", "estado"),
        ])
}

fn complaint_seed(party_key: &str) -> Vec<Record> {
    vec![
        RecordBuilder::new(1)
            .reference(party_key, 1)
            .text("fecha", "2025-08-25")
            .text("descripcion", "")
            .text("estado", "En progreso")
            .build(),
    ]
}

pub fn client_complaints_schema() -> EntitySchema {
    complaint_schema(
        EntityKind::ClientComplaints,
        messages(
            "Reclamo de cliente agregado",
            "Reclamo de cliente editado",
            "Reclamo(s) de cliente(s) eliminado(s)",
            "¿Eliminar reclamo de cliente(s)?",
            "¿Estás seguro que deseas eliminar el/los reclamo(s) de cliente(s) seleccionado(s)?",
        ),
        FieldSpec::reference("idCliente", "Cliente", "clientes").required("Seleccione el cliente"),
        "ID Cliente",
        lookups::clientes(),
    )
}

pub fn client_complaints_seed() -> Vec<Record> {
    complaint_seed("idCliente")
}

pub fn supplier_complaints_schema() -> EntitySchema {
    complaint_schema(
        EntityKind::SupplierComplaints,
        messages(
            "Reclamo a proveedor agregado",
            "Reclamo a proveedor editado",
            "Reclamo(s) a proveedor(es) eliminado(s)",
            "¿Eliminar reclamo a proveedor(es)?",
            "¿Estás seguro que deseas eliminar el/los reclamo(s) a proveedor(es) seleccionado(s)?",
        ),
        FieldSpec::reference("idProveedor", "Proveedor", "proveedores")
            .required("Seleccione el proveedor"),
        "ID Proveedor",
        lookups::proveedores(),
    )
}

pub fn supplier_complaints_seed() -> Vec<Record> {
    complaint_seed("idProveedor")
}
