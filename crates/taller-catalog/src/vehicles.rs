use taller_types::{EntityKind, EntitySchema, FieldKind, FieldSpec, Record};

use crate::builder::{RecordBuilder, messages, named};

pub fn vehicles_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Vehicles,
        messages(
            "Auto agregado",
            "Auto editado",
            "Auto(s) eliminado(s)",
            "¿Eliminar auto(s)?",
            "¿Estás seguro que deseas eliminar el/los auto(s) seleccionado(s)?",
        ),
    )
    .field(FieldSpec::new("idCliente", "ID Cliente", FieldKind::Integer).required("Ingrese el cliente"))
    .field(FieldSpec::text("patente", "Patente").required("Ingrese la patente"))
    .field(FieldSpec::text("modelo", "Modelo").required("Ingrese el modelo"))
}

pub fn vehicles_seed() -> Vec<Record> {
    [
        ("ABC123", "Corolla"),
        ("XYZ789", "Cruze"),
        ("AFG728", "Kangoo"),
        ("HWR349", "Bora"),
        ("LKF196", "Fun"),
        ("PED461", "Vento"),
        ("KSJ564", "Duster"),
        ("GSI278", "Partner"),
    ]
    .iter()
    .zip(1..)
    .map(|((patente, modelo), id)| {
        RecordBuilder::new(id)
            .integer("idCliente", i64::from(id))
            .text("patente", patente)
            .text("modelo", modelo)
            .build()
    })
    .collect()
}

pub fn brands_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::CarBrands,
        messages(
            "Marca agregada",
            "Marca editada",
            "Marca(s) eliminada(s)",
            "¿Eliminar marca(s)?",
            "¿Estás seguro que deseas eliminar la/las marca(s) seleccionada(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
}

pub fn brands_seed() -> Vec<Record> {
    named(
        "nombre",
        &[
            "Toyota",
            "Chevrolet",
            "Renault",
            "Volkswagen",
            "Suzuki",
            "Volkswagen",
            "Renault",
            "Peugeot",
        ],
    )
}

pub fn models_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::CarModels,
        messages(
            "Modelo agregado",
            "Modelo editado",
            "Modelo(s) eliminado(s)",
            "¿Eliminar modelo(s)?",
            "¿Estás seguro que deseas eliminar el/los modelo(s) seleccionado(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
    .field(FieldSpec::new("idMarca", "ID Marca", FieldKind::Integer).required("Ingrese un ID de Marca"))
}

pub fn models_seed() -> Vec<Record> {
    ["Corolla", "Cruze", "Kangoo", "Bora", "Fun", "Vento", "Duster", "Partner"]
        .iter()
        .zip(1..)
        .map(|(nombre, id)| {
            RecordBuilder::new(id)
                .text("nombre", nombre)
                .integer("idMarca", i64::from(id))
                .build()
        })
        .collect()
}
