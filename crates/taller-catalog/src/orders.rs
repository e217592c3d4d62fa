//! Composite entities: purchase orders and work orders carry line-item
//! sections picked from small catalogs.

use taller_types::{
    EntityKind, EntitySchema, FieldKind, FieldSpec, LineSectionSpec, LookupList, Record,
};

use crate::builder::{RecordBuilder, line, messages};
use crate::lookups::ESTADOS_SEGUIMIENTO;

pub fn purchase_orders_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::PurchaseOrders,
        messages(
            "Orden de compra agregada",
            "Orden de compra editada",
            "Orden(es) de compra eliminada(s)",
            "¿Eliminar orden de compra(s)?",
            "¿Estás seguro que deseas eliminar la/las orden(es) de compra seleccionada(s)?",
        ),
    )
    .field(
        FieldSpec::reference("idProveedor", "ID Proveedor", "proveedores")
            .required("Seleccione el proveedor"),
    )
    .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Ingrese la fecha"))
    .section(LineSectionSpec {
        key: "repuestos",
        title: "Repuestos",
        item_label: "Repuesto",
        catalog: LookupList::new(
            "repuestos",
            &[(1, "Pastillas de freno"), (2, "Pastillas"), (3, "Amortiguadores")],
        ),
    })
    .lookup(LookupList::new(
        "proveedores",
        &[(1, "Carlos Perez"), (2, "Susana Marquez")],
    ))
}

pub fn purchase_orders_seed() -> Vec<Record> {
    vec![
        RecordBuilder::new(1)
            .reference("idProveedor", 1)
            .text("fecha", "2025-09-01")
            .lines(
                "repuestos",
                vec![
                    line(1, 2, "Pastillas de freno", 4, 20000),
                    line(2, 3, "Amortiguadores", 2, 30000),
                ],
            )
            .build(),
    ]
}

pub fn work_orders_schema() -> EntitySchema {
    EntitySchema::new(
        EntityKind::WorkOrders,
        messages(
            "Orden de trabajo agregada",
            "Orden de trabajo editada",
            "Orden(es) de trabajo eliminada(s)",
            "¿Eliminar orden de trabajo(s)?",
            "¿Estás seguro que deseas eliminar la/las orden(es) de trabajo seleccionada(s)?",
        ),
    )
    .field(FieldSpec::reference("idTurno", "ID Turno", "turnos").required("Seleccione el turno"))
    .field(
        FieldSpec::reference("idMecanico", "ID Mecanico", "mecanicos")
            .required("Seleccione el mecanico"),
    )
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
    .field(FieldSpec::new("fecha", "Fecha", FieldKind::Date).required("Ingrese la fecha"))
    .section(LineSectionSpec {
        key: "servicios",
        title: "Servicios",
        item_label: "Servicio",
        catalog: LookupList::new(
            "servicios",
            &[(1, "Cambio de aceite"), (2, "Alineacion"), (3, "Frenos")],
        ),
    })
    .section(LineSectionSpec {
        key: "repuestos",
        title: "Repuestos",
        item_label: "Repuesto",
        catalog: LookupList::new(
            "repuestos",
            &[(1, "Filtro de aire"), (2, "Pastillas"), (3, "Bujia")],
        ),
    })
    .lookup(LookupList::new(
        "turnos",
        &[
            (1, "Turno #1"),
            (2, "Turno #2"),
            (3, "Turno #3"),
            (4, "Turno #4"),
            (5, "Turno #5"),
        ],
    ))
    .lookup(LookupList::new(
        "mecanicos",
        &[(1, "Carlos Ruiz"), (2, "Laura Martinez")],
    ))
}

pub fn work_orders_seed() -> Vec<Record> {
    vec![
        RecordBuilder::new(1)
            .reference("idTurno", 1)
            .reference("idMecanico", 1)
            .text("estado", "En progreso")
            .text("fecha", "2025-08-25")
            .lines("servicios", vec![line(1, 1, "Cambio de aceite", 1, 3000)])
            .lines("repuestos", vec![line(1, 2, "Pastillas", 1, 4500)])
            .build(),
    ]
}
