use taller_types::{
    ColumnSpec, EntityKind, EntitySchema, FieldKind, FieldSpec, LookupList, Record,
};

use crate::builder::{RecordBuilder, messages};
use crate::lookups;

const VOUCHER_MESSAGES: taller_types::ScreenMessages = messages(
    "Comprobante agregado",
    "Comprobante editado",
    "Comprobante(s) eliminado(s)",
    "¿Eliminar comprobante(s)?",
    "¿Estás seguro que deseas eliminar el/los comprobante(s) seleccionado(s)?",
);

fn amounts(schema: EntitySchema) -> EntitySchema {
    schema
        .field(FieldSpec::new("total", "Total", FieldKind::Amount).required("Ingrese el total"))
        .field(
            FieldSpec::new("subtotal", "Subtotal", FieldKind::Amount)
                .required("Ingrese el subtotal"),
        )
}

pub fn sale_vouchers_schema() -> EntitySchema {
    let schema = EntitySchema::new(EntityKind::SaleVouchers, VOUCHER_MESSAGES)
        .field(
            FieldSpec::new("idReparacion", "ID Reparacion", FieldKind::Integer)
                .required("Ingrese el ID de la reparación"),
        )
        .field(FieldSpec::reference("idCliente", "Cliente", "clientes").required("Seleccione un cliente"))
        .field(FieldSpec::reference("idAuto", "Auto", "autos").required("Seleccione un auto"))
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Seleccione la fecha"))
        .field(FieldSpec::new("hora", "Hora", FieldKind::Time).required("Seleccione la hora"));

    amounts(schema)
        .field(FieldSpec::text("observaciones", "Observaciones").with_default("-"))
        .lookup(lookups::clientes())
        .lookup(lookups::autos())
}

pub fn sale_vouchers_seed() -> Vec<Record> {
    [
        (20, 1, 2, "10:00", 15000, 13000),
        (21, 2, 3, "11:00", 21000, 24000),
        (22, 3, 1, "12:00", 19000, 23000),
    ]
    .iter()
    .zip(1..)
    .map(|(&(reparacion, cliente, auto, hora, total, subtotal), id)| {
        RecordBuilder::new(id)
            .integer("idReparacion", reparacion)
            .reference("idCliente", cliente)
            .reference("idAuto", auto)
            .text("fecha", "2025-08-21")
            .text("hora", hora)
            .integer("total", total)
            .integer("subtotal", subtotal)
            .text("observaciones", "-")
            .build()
    })
    .collect()
}

pub fn payment_vouchers_schema() -> EntitySchema {
    let schema = EntitySchema::new(EntityKind::PaymentVouchers, VOUCHER_MESSAGES)
        .field(
            FieldSpec::reference("idCompVenta", "Comprobante de venta", "comprobantes")
                .required("Seleccione el comprobante de venta"),
        )
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Seleccione la fecha"));

    amounts(schema)
        .field(
            FieldSpec::new(
                "mediopago",
                "Medio de Pago",
                FieldKind::Choice {
                    options: &["Efectivo", "Tarjeta", "Transferencia"],
                },
            )
            .required("Seleccione el medio de pago"),
        )
        .lookup(LookupList::new(
            "comprobantes",
            &[
                (1, "Comprobante Venta #1"),
                (2, "Comprobante Venta #2"),
                (3, "Comprobante Venta #3"),
            ],
        ))
        .with_columns(vec![
            ColumnSpec::id(),
            ColumnSpec::field("IDCompVenta", "idCompVenta"),
            ColumnSpec::field("Fecha", "fecha"),
            ColumnSpec::field("Total", "total"),
            ColumnSpec::field("Subtotal", "subtotal"),
            ColumnSpec::field("Medio de Pago", "mediopago"),
        ])
}

pub fn payment_vouchers_seed() -> Vec<Record> {
    [(15000, 13000), (21000, 24000), (19000, 23000)]
        .iter()
        .zip(1..)
        .map(|(&(total, subtotal), id)| {
            RecordBuilder::new(id)
                .reference("idCompVenta", 3)
                .text("fecha", "2025-08-21")
                .integer("total", total)
                .integer("subtotal", subtotal)
                .text("mediopago", "Tarjeta")
                .build()
        })
        .collect()
}

pub fn purchase_vouchers_schema() -> EntitySchema {
    let schema = EntitySchema::new(EntityKind::PurchaseVouchers, VOUCHER_MESSAGES)
        .field(
            FieldSpec::reference("idProveedor", "Proveedor", "proveedores")
                .required("Seleccione el proveedor"),
        )
        .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Seleccione la fecha"));

    amounts(schema)
        .field(FieldSpec::text("observaciones", "Observaciones"))
        .lookup(LookupList::new(
            "proveedores",
            &[(1, "Proveedor A"), (2, "Proveedor B"), (3, "Proveedor C")],
        ))
        .with_columns(vec![
            ColumnSpec::id(),
            ColumnSpec::field("IDProveedor", "idProveedor"),
            ColumnSpec::field("Fecha", "fecha"),
            ColumnSpec::field("Total", "total"),
            ColumnSpec::field("Subtotal", "subtotal"),
            ColumnSpec::field("Observaciones", "observaciones"),
        ])
}

pub fn purchase_vouchers_seed() -> Vec<Record> {
    [(15000, 13000), (21000, 24000), (19000, 23000)]
        .iter()
        .zip(1..)
        .map(|(&(total, subtotal), id)| {
            RecordBuilder::new(id)
                .reference("idProveedor", 3)
                .text("fecha", "2025-08-21")
                .integer("total", total)
                .integer("subtotal", subtotal)
                .text("observaciones", " - ")
                .build()
        })
        .collect()
}
