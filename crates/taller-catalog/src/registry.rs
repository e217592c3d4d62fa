use once_cell::sync::Lazy;
use std::collections::BTreeMap;
use std::sync::Arc;

use taller_types::{EntityKind, EntitySchema, Record};

use crate::{agenda, complaints, orders, people, reference, vehicles, vouchers};

/// Builders behind one screen
#[derive(Clone, Copy)]
struct ScreenEntry {
    schema: fn() -> EntitySchema,
    seed: fn() -> Vec<Record>,
}

fn entry(schema: fn() -> EntitySchema, seed: fn() -> Vec<Record>) -> ScreenEntry {
    ScreenEntry { schema, seed }
}

fn lookup(kind: EntityKind) -> ScreenEntry {
    match kind {
        EntityKind::Appointments => entry(agenda::appointments_schema, agenda::appointments_seed),
        EntityKind::Sales => entry(agenda::sales_schema, agenda::sales_seed),
        EntityKind::Clients => entry(people::clients_schema, people::clients_seed),
        EntityKind::Vehicles => entry(vehicles::vehicles_schema, vehicles::vehicles_seed),
        EntityKind::Repairs => entry(agenda::repairs_schema, agenda::repairs_seed),
        EntityKind::SaleVouchers => entry(vouchers::sale_vouchers_schema, vouchers::sale_vouchers_seed),
        EntityKind::PaymentVouchers => entry(vouchers::payment_vouchers_schema, vouchers::payment_vouchers_seed),
        EntityKind::PurchaseVouchers => entry(vouchers::purchase_vouchers_schema, vouchers::purchase_vouchers_seed),
        EntityKind::PurchaseOrders => entry(orders::purchase_orders_schema, orders::purchase_orders_seed),
        EntityKind::WorkOrders => entry(orders::work_orders_schema, orders::work_orders_seed),
        EntityKind::ClientComplaints => entry(complaints::client_complaints_schema, complaints::client_complaints_seed),
        EntityKind::SupplierComplaints => entry(complaints::supplier_complaints_schema, complaints::supplier_complaints_seed),
        EntityKind::Mechanics => entry(people::mechanics_schema, people::mechanics_seed),
        EntityKind::Suppliers => entry(people::suppliers_schema, people::suppliers_seed),
        EntityKind::Parts => entry(reference::parts_schema, reference::parts_seed),
        EntityKind::Services => entry(reference::services_schema, reference::services_seed),
        EntityKind::PaymentMethods => entry(reference::payment_methods_schema, reference::payment_methods_seed),
        EntityKind::CarModels => entry(vehicles::models_schema, vehicles::models_seed),
        EntityKind::CarBrands => entry(vehicles::brands_schema, vehicles::brands_seed),
        EntityKind::DocumentTypes => entry(reference::document_types_schema, reference::document_types_seed),
        EntityKind::Streets => entry(reference::streets_schema, reference::streets_seed),
    }
}

static SCHEMAS: Lazy<BTreeMap<EntityKind, Arc<EntitySchema>>> = Lazy::new(|| {
    EntityKind::ALL
        .iter()
        .map(|&kind| (kind, Arc::new((lookup(kind).schema)())))
        .collect()
});

/// Shared schema of one screen
pub fn schema(kind: EntityKind) -> Arc<EntitySchema> {
    SCHEMAS
        .get(&kind)
        .cloned()
        .unwrap_or_else(|| Arc::new((lookup(kind).schema)()))
}

/// Fresh copy of the hard-coded records a screen starts with
pub fn seed(kind: EntityKind) -> Vec<Record> {
    (lookup(kind).seed)()
}

/// Schemas in sidebar order
pub fn all_schemas() -> Vec<Arc<EntitySchema>> {
    EntityKind::ALL.iter().map(|&kind| schema(kind)).collect()
}
