//! Appointments, repairs and sales.

use taller_types::{EntityKind, EntitySchema, FieldKind, FieldSpec, Record, ScreenMessages};

use crate::builder::{RecordBuilder, messages};
use crate::lookups::{self, ESTADOS_REPARACION};

/// Client, car, date, time and state: the shape shared by appointments and repairs
fn booking_schema(kind: EntityKind, messages: ScreenMessages) -> EntitySchema {
    EntitySchema::new(kind, messages)
        .field(FieldSpec::reference("idCliente", "Cliente", "clientes").required("Seleccione un cliente"))
        .field(FieldSpec::reference("idAuto", "Auto", "autos").required("Seleccione un auto"))
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Seleccione la fecha"))
        .field(FieldSpec::new("hora", "Hora", FieldKind::Time).required("Seleccione la hora"))
        .field(
            FieldSpec::new(
                "estado",
                "Estado",
                FieldKind::Choice {
                    options: ESTADOS_REPARACION,
                },
            )
            .required("Seleccione el estado")
            .with_default("Pendiente"),
        )
        .lookup(lookups::clientes())
        .lookup(lookups::autos())
}

fn booking_seed() -> Vec<Record> {
    [
        (1, 2, "10:00", "Pendiente"),
        (2, 3, "11:00", "Confirmado"),
        (3, 1, "12:00", "Pendiente"),
    ]
    .iter()
    .zip(1..)
    .map(|(&(cliente, auto, hora, estado), id)| {
        RecordBuilder::new(id)
            .reference("idCliente", cliente)
            .reference("idAuto", auto)
            .text("fecha", "2025-08-21")
            .text("hora", hora)
            .text("estado", estado)
            .build()
    })
    .collect()
}

pub fn appointments_schema() -> EntitySchema {
    booking_schema(
        EntityKind::Appointments,
        messages(
            "Turno agregado",
            "Turno editado",
            "Turno(s) eliminado(s)",
            "¿Eliminar turno(s)?",
            "¿Estás seguro que deseas eliminar el/los turno(s) seleccionado(s)?",
        ),
    )
}

pub fn appointments_seed() -> Vec<Record> {
    booking_seed()
}

pub fn repairs_schema() -> EntitySchema {
    booking_schema(
        EntityKind::Repairs,
        messages(
            "Reparacion agregada",
            "Reparacion editada",
            "Reparacion(es) eliminada(s)",
            "¿Eliminar reparacion(es)?",
            "¿Estás seguro que deseas eliminar la/las reparacion(es) seleccionada(s)?",
        ),
    )
}

pub fn repairs_seed() -> Vec<Record> {
    booking_seed()
}

pub fn sales_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::Sales,
        messages(
            "Venta agregada",
            "Venta editada",
            "Venta(s) eliminada(s)",
            "¿Eliminar venta(s)?",
            "¿Estás seguro que deseas eliminar la/s venta/s seleccionada/s?",
        ),
    )
    .field(FieldSpec::text("cliente", "Cliente").required("Ingrese el nombre del cliente"))
    .field(FieldSpec::text("vehiculo", "Vehículo").required("Ingrese el vehículo"))
    .field(FieldSpec::text("descripcion", "Descripción").required("Ingrese la descripción"))
    .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Ingrese la fecha"))
    .field(FieldSpec::new("monto", "Monto", FieldKind::Amount).required("Ingrese el monto"))
}

pub fn sales_seed() -> Vec<Record> {
    [
        ("Juan Pérez", "Ford Fiesta", "Cambio de aceite y filtro", "2025-08-20", 5000),
        ("María Gómez", "Renault Clio", "Reparación de frenos", "2025-08-22", 12000),
        (
            "Carlos López",
            "Peugeot 208",
            "Cambio de correa de distribución",
            "2025-08-25",
            18000,
        ),
    ]
    .iter()
    .zip(1..)
    .map(|(&(cliente, vehiculo, descripcion, fecha, monto), id)| {
        RecordBuilder::new(id)
            .text("cliente", cliente)
            .text("vehiculo", vehiculo)
            .text("descripcion", descripcion)
            .text("fecha", fecha)
            .integer("monto", monto)
            .build()
    })
    .collect()
}
