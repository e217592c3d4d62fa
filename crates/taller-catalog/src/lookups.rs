// Static reference lists shared by several screens. Screen-specific lists
// live next to their schema.

use taller_types::LookupList;

pub(crate) const ESTADOS_REPARACION: &[&str] = &["Pendiente", "Confirmado", "Finalizado"];
pub(crate) const ESTADOS_SEGUIMIENTO: &[&str] = &["Pendiente", "En progreso", "Completado"];

pub(crate) fn clientes() -> LookupList {
    LookupList::new(
        "clientes",
        &[(1, "Juan Pérez"), (2, "Ana Gómez"), (3, "Carlos Ruiz")],
    )
}

pub(crate) fn autos() -> LookupList {
    LookupList::new(
        "autos",
        &[
            (1, "Toyota Corolla (ABC123)"),
            (2, "Ford Fiesta (XYZ789)"),
            (3, "Chevrolet Onix (DEF456)"),
        ],
    )
}

pub(crate) fn proveedores() -> LookupList {
    LookupList::new(
        "proveedores",
        &[(1, "Casa de repuestos 1"), (2, "Casa de repuestos 2")],
    )
}
