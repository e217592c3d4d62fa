//! `config show`, `config init` and settings that change command behavior.

mod common;

use common::TestShop;
use predicates::prelude::*;

#[test]
fn test_config_show_defaults() {
    let shop = TestShop::new();
    let json = shop.json(&["config", "show"]);

    assert_eq!(json["content"]["exists"], false);
    assert_eq!(json["content"]["page_size"], 8);
    assert_eq!(json["content"]["selection_mode"], "single");
    assert_eq!(json["content"]["require_line_items"], true);
    assert_eq!(json["content"]["check_references"], false);
}

#[test]
fn test_config_init_writes_defaults() {
    let shop = TestShop::new();

    shop.command()
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("page_size = 8"));

    let written = std::fs::read_to_string(shop.config_path()).unwrap();
    assert!(written.contains("[selection]"));
    assert!(written.contains("mode = \"single\""));
}

#[test]
fn test_config_init_refuses_to_overwrite() {
    let shop = TestShop::new();
    shop.write_config("[list]\npage_size = 3\n");

    shop.command()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    let kept = std::fs::read_to_string(shop.config_path()).unwrap();
    assert!(kept.contains("page_size = 3"));
}

#[test]
fn test_config_init_force_resets() {
    let shop = TestShop::new();
    shop.write_config("[list]\npage_size = 3\n");

    shop.command()
        .args(["config", "init", "--force"])
        .assert()
        .success();

    let written = std::fs::read_to_string(shop.config_path()).unwrap();
    assert!(written.contains("page_size = 8"));
}

#[test]
fn test_page_size_from_config() {
    let shop = TestShop::new();
    shop.write_config("[list]\npage_size = 3\n");

    shop.command()
        .args(["list", "calles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Calles (page 1/4, 10 records)"));
}

#[test]
fn test_zero_page_size_is_rejected() {
    let shop = TestShop::new();
    shop.write_config("[list]\npage_size = 0\n");

    shop.command()
        .args(["list", "calles"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("page_size"));
}

#[test]
fn test_multiple_mode_deletes_several_ids() {
    let shop = TestShop::new();
    shop.write_config("[selection]\nmode = \"multiple\"\n");

    shop.command()
        .args(["delete", "calles", "1", "2", "99", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Removed 2 record(s) from calles; 8 remain.",
        ))
        .stdout(predicate::str::contains("Not found: 99"));
}

#[test]
fn test_line_items_can_be_optional() {
    let shop = TestShop::new();
    shop.write_config("[forms]\nrequire_line_items = false\n");

    shop.command()
        .args([
            "create",
            "ordenCompra",
            "--set",
            "idProveedor=1",
            "--set",
            "fecha=2025-09-10",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Orden de compra agregada"));
}

#[test]
fn test_reference_check_rejects_unknown_supplier() {
    let shop = TestShop::new();
    shop.write_config("[forms]\ncheck_references = true\n");

    shop.command()
        .args([
            "create",
            "ordenCompra",
            "--set",
            "idProveedor=9",
            "--set",
            "fecha=2025-09-10",
            "--line",
            "repuestos:1:1:100",
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ID Proveedor"));
}
