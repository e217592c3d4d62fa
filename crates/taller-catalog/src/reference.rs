//! Reference tables: streets, document types, payment methods, services and
//! parts.

use taller_types::{EntityKind, EntitySchema, FieldKind, FieldSpec, Record};

use crate::builder::{RecordBuilder, messages, named};

pub fn streets_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Streets,
        messages(
            "Calle agregada",
            "Calle editada",
            "Calle(s) eliminada(s)",
            "¿Eliminar calle?",
            "¿Estás seguro que deseas eliminar la(s) calle(s) seleccionada(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
}

pub fn streets_seed() -> Vec<Record> {
    named(
        "nombre",
        &[
            "San Martin",
            "Del Campo",
            "Alsina",
            "Varela",
            "Gutierrez",
            "Artigas",
            "Estrada",
            "Mitre",
            "Balcarse",
            "Encina",
        ],
    )
}

pub fn document_types_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::DocumentTypes,
        messages(
            "Tipo de documento agregado",
            "Tipo de documento editado",
            "Tipo(s) de documento eliminado(s)",
            "¿Eliminar tipo(s) de documento?",
            "¿Estás seguro que deseas eliminar el/los tipo(s) de documento seleccionado(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
}

pub fn document_types_seed() -> Vec<Record> {
    named("nombre", &["DNI", "CUIT", "CUIL", "Pasaporte"])
}

pub fn payment_methods_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::PaymentMethods,
        messages(
            "Medio de pago agregado",
            "Medio de pago editado",
            "Medio(s) de pago eliminado(s)",
            "¿Eliminar medio(s) de pago?",
            "¿Estás seguro que deseas eliminar el/los medio(s) de pago seleccionado(s)?",
        ),
    )
    .field(FieldSpec::text("tipo", "Tipo").required("Ingrese el tipo"))
}

pub fn payment_methods_seed() -> Vec<Record> {
    named("tipo", &["Efectivo", "Transferencia"])
}

pub fn services_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Services,
        messages(
            "Servicio agregado",
            "Servicio editado",
            "Servicio(s) eliminado(s)",
            "¿Eliminar servicio(s)?",
            "¿Estás seguro que deseas eliminar el/los servicio(s) seleccionado(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
    .field(FieldSpec::new("importe", "Importe", FieldKind::Amount).required("Ingrese un importe"))
    // Optional: every seeded service leaves it blank
    .field(FieldSpec::text("observacion", "Observacion"))
}

pub fn services_seed() -> Vec<Record> {
    [
        ("Alineacion", 20000),
        ("Balanceo", 16000),
        ("Rotacion de ruedas", 15000),
        ("Cambio de pastilla/disco de freno", 22000),
        ("Cambio de amortiguador", 13000),
        ("Cambio de espiral", 17000),
        ("Cambio de bieletas", 25000),
        ("Cambio de precap", 20000),
    ]
    .iter()
    .zip(1..)
    .map(|((nombre, importe), id)| {
        RecordBuilder::new(id)
            .text("nombre", nombre)
            .integer("importe", *importe)
            .text("observacion", "")
            .build()
    })
    .collect()
}

pub fn parts_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Parts,
        messages(
            "Repuesto agregado",
            "Repuesto editado",
            "Repuesto(s) eliminado(s)",
            "¿Eliminar repuesto(s)?",
            "¿Estás seguro que deseas eliminar el/los repuesto(s) seleccionado(s)?",
        ),
    )
    .field(FieldSpec::text("nombre", "Nombre").required("Ingrese el nombre"))
    .field(FieldSpec::text("modelo", "Modelo").required("Ingrese un modelo"))
    .field(FieldSpec::new("anio", "Año", FieldKind::Integer).required("Ingrese el año"))
}

pub fn parts_seed() -> Vec<Record> {
    [
        ("Amortiguador", "Toyota Corolla", 2014),
        ("Pastilla de freno", "Suzuki Fun", 2009),
        ("Buje de parrilla", "Volkswagen Vento", 2012),
        ("Rotula", "Renault Duster", 2017),
        ("Cazoleta", "Peugeot Partner", 2011),
        ("Espiral", "Chevrolet Cruze", 2013),
        ("Bieleta", "Renault Kangoo", 2010),
        ("Precap", "Volkswagen Bora", 2008),
    ]
    .iter()
    .zip(1..)
    .map(|((nombre, modelo, anio), id)| {
        RecordBuilder::new(id)
            .text("nombre", nombre)
            .text("modelo", modelo)
            .integer("anio", *anio)
            .build()
    })
    .collect()
}
