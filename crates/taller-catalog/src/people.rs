//! Clients, mechanics and suppliers: name, email and phone contacts.

use taller_types::{EntityKind, EntitySchema, FieldKind, FieldSpec, Record, ScreenMessages};

use crate::builder::{RecordBuilder, messages};

fn contact_schema(kind: EntityKind, messages: ScreenMessages) -> EntitySchema {
    EntitySchema::new(kind, messages)
        .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
        .field(FieldSpec::new("email", "Email", FieldKind::Email).required("Ingrese un email válido"))
        .field(FieldSpec::text("telefono", "Teléfono").required("Ingrese el teléfono"))
}

fn contact(id: u32, nombre: &str, email: &str, telefono: &str) -> Record {
    RecordBuilder::new(id)
        .text("nombre", nombre)
        .text("email", email)
        .text("telefono", telefono)
        .build()
}

pub fn clients_schema() -> EntitySchema {
    contact_schema(
        EntityKind::Clients,
        messages(
            "Cliente agregado",
            "Cliente editado",
            "Cliente(s) eliminado(s)",
            "¿Eliminar cliente(s)?",
            "¿Estás seguro que deseas eliminar el/los cliente(s) seleccionado(s)?",
        ),
    )
}

pub fn clients_seed() -> Vec<Record> {
    vec![
        contact(1, "Juan Pérez", "juan@example.com", "123456789"),
        contact(2, "Ana Gómez", "ana@example.com", "987654321"),
    ]
}

pub fn mechanics_schema() -> EntitySchema {
    contact_schema(
        EntityKind::Mechanics,
        messages(
            "Mecanico agregado",
            "Mecanico editado",
            "Mecanico(s) eliminado(s)",
            "¿Eliminar mecanico(s)?",
            "¿Estás seguro que deseas eliminar el/los mecanico(s) seleccionado(s)?",
        ),
    )
}

pub fn mechanics_seed() -> Vec<Record> {
    vec![
        contact(1, "Alberto Gonzalez", "albert@example.com", "123446297"),
        contact(2, "Matias Pinedo", "mati@example.com", "987667428"),
    ]
}

pub fn suppliers_schema() -> EntitySchema {
    contact_schema(
        EntityKind::Suppliers,
        messages(
            "Proveedor agregado",
            "Proveedor editado",
            "Proveedor(es) eliminado(s)",
            "¿Eliminar proveedor(es)?",
            "¿Estás seguro que deseas eliminar el/los proveedor(es) seleccionado(s)?",
        ),
    )
}

pub fn suppliers_seed() -> Vec<Record> {
    vec![
        contact(1, "Casa de repuestos 1", "casarep1@example.com", "123453158"),
        contact(2, "Casa de repuestos 2", "casarep2@example.com", "987658513"),
    ]
}
