//! List, show, create, edit and delete against the seeded screens.
//!
//! Each invocation mounts its screen from the seed, so changes never carry
//! over between commands.

mod common;

use common::TestShop;
use predicates::prelude::*;

#[test]
fn test_list_first_page() {
    let shop = TestShop::new();

    shop.command()
        .args(["list", "calles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calles (page 1/2, 10 records)"))
        .stdout(predicate::str::contains("San Martin"))
        .stdout(predicate::str::contains("Mitre"))
        .stdout(predicate::str::contains("Balcarse").not())
        .stdout(predicate::str::contains("taller list calles --page 2"));
}

#[test]
fn test_list_second_page() {
    let shop = TestShop::new();
    let json = shop.json(&["list", "calles", "--page", "2"]);

    assert_eq!(json["content"]["page"], 2);
    assert_eq!(json["content"]["total_pages"], 2);
    let ids: Vec<u64> = json["content"]["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![9, 10]);
}

#[test]
fn test_list_page_is_clamped() {
    let shop = TestShop::new();
    let json = shop.json(&["list", "calles", "--page", "9"]);

    assert_eq!(json["content"]["page"], 2);
}

#[test]
fn test_show_resolves_lookups_and_totals() {
    let shop = TestShop::new();

    shop.command()
        .args(["show", "ordenCompra", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ordenes de compra #1"))
        .stdout(predicate::str::contains("Carlos Perez"))
        .stdout(predicate::str::contains("Amortiguadores"))
        .stdout(predicate::str::contains("Total: 50000"));
}

#[test]
fn test_show_missing_record_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["show", "calles", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with id 99 in"));
}

#[test]
fn test_create_assigns_next_id() {
    let shop = TestShop::new();

    shop.command()
        .args(["create", "calles", "--set", "nombre=Lavalle"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calle agregada"))
        .stdout(predicate::str::contains("Calles #11"))
        .stdout(predicate::str::contains("Lavalle"));
}

#[test]
fn test_create_json_reports_action() {
    let shop = TestShop::new();
    let json = shop.json(&["create", "calles", "--set", "nombre=Lavalle"]);

    assert_eq!(json["content"]["action"], "created");
    assert_eq!(json["content"]["record"]["id"], 11);
    assert_eq!(json["badge"]["label"], "Calle agregada");
}

#[test]
fn test_create_with_missing_required_field_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["create", "servicios", "--set", "importe=1000"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Nombre: Ingrese el nombre"))
        .stderr(predicate::str::contains("Validation failed"));
}

#[test]
fn test_create_with_unknown_field_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["create", "calles", "--set", "altura=100"])
        .assert()
        .failure();
}

#[test]
fn test_composite_create_requires_line_items() {
    let shop = TestShop::new();

    shop.command()
        .args([
            "create",
            "ordenCompra",
            "--set",
            "idProveedor=2",
            "--set",
            "fecha=2025-09-10",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Agregue al menos un ítem en Repuestos"));
}

#[test]
fn test_composite_create_with_line_items() {
    let shop = TestShop::new();

    shop.command()
        .args([
            "create",
            "ordenCompra",
            "--set",
            "idProveedor=2",
            "--set",
            "fecha=2025-09-10",
            "--line",
            "repuestos:3:2:30000",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orden de compra agregada"))
        .stdout(predicate::str::contains("Susana Marquez"))
        .stdout(predicate::str::contains("Total: 30000"));
}

#[test]
fn test_invalid_line_item_is_reported() {
    let shop = TestShop::new();

    shop.command()
        .args([
            "create",
            "ordenCompra",
            "--set",
            "idProveedor=1",
            "--set",
            "fecha=2025-09-10",
            "--line",
            "repuestos:3:0:30000",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Cantidad"));
}

#[test]
fn test_malformed_line_argument_is_a_usage_error() {
    let shop = TestShop::new();

    shop.command()
        .args(["create", "ordenCompra", "--line", "repuestos:3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SECTION:ITEM:QTY:AMOUNT"));
}

#[test]
fn test_edit_updates_fields() {
    let shop = TestShop::new();

    shop.command()
        .args(["edit", "mecanicos", "1", "--set", "telefono=555"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mecanico editado"))
        .stdout(predicate::str::contains("Alberto Gonzalez"))
        .stdout(predicate::str::contains("555"));
}

#[test]
fn test_edit_replaces_named_line_section() {
    let shop = TestShop::new();
    let json = shop.json(&["edit", "ordenCompra", "1", "--line", "repuestos:1:1:5000"]);

    let section = &json["content"]["record"]["sections"][0];
    assert_eq!(section["items"].as_array().unwrap().len(), 1);
    assert_eq!(section["items"][0]["item"], "Pastillas de freno");
    assert_eq!(section["total"], 5000);
}

#[test]
fn test_edit_missing_record_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["edit", "mecanicos", "7", "--set", "telefono=555"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No record with id 7"));
}

#[test]
fn test_delete_with_yes() {
    let shop = TestShop::new();

    shop.command()
        .args(["delete", "proveedores", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Proveedor(es) eliminado(s)"))
        .stdout(predicate::str::contains(
            "Removed 1 record(s) from proveedores; 1 remain.",
        ));
}

#[test]
fn test_delete_without_confirmation_refuses() {
    let shop = TestShop::new();

    shop.command()
        .args(["delete", "proveedores", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("pass --yes"));
}

#[test]
fn test_delete_several_ids_needs_multiple_mode() {
    let shop = TestShop::new();

    shop.command()
        .args(["delete", "calles", "1", "2", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("mode = \"multiple\""));
}

#[test]
fn test_delete_unknown_id_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["delete", "calles", "42", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no matching records"));
}
