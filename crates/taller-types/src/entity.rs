use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Every business object the console manages, one screen each
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum EntityKind {
    #[serde(rename = "turnos")]
    Appointments,
    #[serde(rename = "ventas")]
    Sales,
    #[serde(rename = "clientes")]
    Clients,
    #[serde(rename = "autos")]
    Vehicles,
    #[serde(rename = "reparacion")]
    Repairs,
    #[serde(rename = "compVenta")]
    SaleVouchers,
    #[serde(rename = "compPago")]
    PaymentVouchers,
    #[serde(rename = "compCompra")]
    PurchaseVouchers,
    #[serde(rename = "ordenCompra")]
    PurchaseOrders,
    #[serde(rename = "ordenTrabajo")]
    WorkOrders,
    #[serde(rename = "reclamoCliente")]
    ClientComplaints,
    #[serde(rename = "reclamoProveedor")]
    SupplierComplaints,
    #[serde(rename = "mecanicos")]
    Mechanics,
    #[serde(rename = "proveedores")]
    Suppliers,
    #[serde(rename = "repuestos")]
    Parts,
    #[serde(rename = "servicios")]
    Services,
    #[serde(rename = "medioDePago")]
    PaymentMethods,
    #[serde(rename = "modelosAuto")]
    CarModels,
    #[serde(rename = "marcasAuto")]
    CarBrands,
    #[serde(rename = "tiposDocumento")]
    DocumentTypes,
    #[serde(rename = "calles")]
    Streets,
}

impl EntityKind {
    /// Sidebar order
    pub const ALL: [EntityKind; 21] = [
        EntityKind::Appointments,
        EntityKind::Sales,
        EntityKind::Clients,
        EntityKind::Vehicles,
        EntityKind::Repairs,
        EntityKind::SaleVouchers,
        EntityKind::PaymentVouchers,
        EntityKind::PurchaseVouchers,
        EntityKind::PurchaseOrders,
        EntityKind::WorkOrders,
        EntityKind::ClientComplaints,
        EntityKind::SupplierComplaints,
        EntityKind::Mechanics,
        EntityKind::Suppliers,
        EntityKind::Parts,
        EntityKind::Services,
        EntityKind::PaymentMethods,
        EntityKind::CarModels,
        EntityKind::CarBrands,
        EntityKind::DocumentTypes,
        EntityKind::Streets,
    ];

    /// Path-like identifier used by the navigation shell
    pub fn path(&self) -> &'static str {
        match self {
            EntityKind::Appointments => "turnos",
            EntityKind::Sales => "ventas",
            EntityKind::Clients => "clientes",
            EntityKind::Vehicles => "autos",
            EntityKind::Repairs => "reparacion",
            EntityKind::SaleVouchers => "compVenta",
            EntityKind::PaymentVouchers => "compPago",
            EntityKind::PurchaseVouchers => "compCompra",
            EntityKind::PurchaseOrders => "ordenCompra",
            EntityKind::WorkOrders => "ordenTrabajo",
            EntityKind::ClientComplaints => "reclamoCliente",
            EntityKind::SupplierComplaints => "reclamoProveedor",
            EntityKind::Mechanics => "mecanicos",
            EntityKind::Suppliers => "proveedores",
            EntityKind::Parts => "repuestos",
            EntityKind::Services => "servicios",
            EntityKind::PaymentMethods => "medioDePago",
            EntityKind::CarModels => "modelosAuto",
            EntityKind::CarBrands => "marcasAuto",
            EntityKind::DocumentTypes => "tiposDocumento",
            EntityKind::Streets => "calles",
        }
    }

    /// Sidebar label
    pub fn title(&self) -> &'static str {
        match self {
            EntityKind::Appointments => "Turnos",
            EntityKind::Sales => "Ventas",
            EntityKind::Clients => "Clientes",
            EntityKind::Vehicles => "Autos",
            EntityKind::Repairs => "Reparaciones",
            EntityKind::SaleVouchers => "Comprobantes de Venta",
            EntityKind::PaymentVouchers => "Comprobantes de Pago",
            EntityKind::PurchaseVouchers => "Comprobantes de Compra",
            EntityKind::PurchaseOrders => "Ordenes de compra",
            EntityKind::WorkOrders => "Ordenes de trabajo",
            EntityKind::ClientComplaints => "Reclamos de clientes",
            EntityKind::SupplierComplaints => "Reclamos a proveedores",
            EntityKind::Mechanics => "Mecanicos",
            EntityKind::Suppliers => "Proveedores",
            EntityKind::Parts => "Repuestos",
            EntityKind::Services => "Servicios",
            EntityKind::PaymentMethods => "Medios de pago",
            EntityKind::CarModels => "Modelos de auto",
            EntityKind::CarBrands => "Marcas de auto",
            EntityKind::DocumentTypes => "Tipos de documento",
            EntityKind::Streets => "Calles",
        }
    }

    /// Case-insensitive lookup by path
    pub fn from_path(path: &str) -> Option<Self> {
        let wanted = path.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|kind| kind.path().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_path(s).ok_or_else(|| Error::UnknownScreen(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_unique() {
        let mut paths: Vec<_> = EntityKind::ALL.iter().map(|k| k.path()).collect();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_from_path_ignores_case_and_leading_slash() {
        assert_eq!(
            EntityKind::from_path("/ordencompra"),
            Some(EntityKind::PurchaseOrders)
        );
        assert_eq!("CALLES".parse::<EntityKind>(), Ok(EntityKind::Streets));
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let err = "presupuesto".parse::<EntityKind>().unwrap_err();
        assert_eq!(err, Error::UnknownScreen("presupuesto".to_string()));
    }
}
