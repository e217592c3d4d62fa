//! Screens, dashboard and the bare `taller` invocation.

mod common;

use common::TestShop;
use predicates::prelude::*;

#[test]
fn test_without_command_prints_welcome() {
    let shop = TestShop::new();

    shop.command()
        .assert()
        .success()
        .stdout(predicate::str::contains("Taller Mecánico"))
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("taller config init"));
}

#[test]
fn test_screens_lists_every_path() {
    let shop = TestShop::new();

    shop.command()
        .arg("screens")
        .assert()
        .success()
        .stdout(predicate::str::contains("calles"))
        .stdout(predicate::str::contains("ordenCompra"))
        .stdout(predicate::str::contains("Ordenes de trabajo (with items)"));
}

#[test]
fn test_screens_json_marks_composite_entities() {
    let shop = TestShop::new();
    let json = shop.json(&["screens"]);

    let screens = json["content"]["screens"].as_array().unwrap();
    let composite: Vec<&str> = screens
        .iter()
        .filter(|s| s["composite"] == true)
        .map(|s| s["path"].as_str().unwrap())
        .collect();

    assert_eq!(composite, vec!["ordenCompra", "ordenTrabajo"]);
    assert!(screens.iter().any(|s| s["path"] == "calles"));
}

#[test]
fn test_dashboard_cards() {
    let shop = TestShop::new();
    let json = shop.json(&["dashboard"]);

    insta::assert_json_snapshot!(json["content"], @r###"
    {
      "title": "Taller Mecánico",
      "date": "2025-08-21",
      "cards": [
        {
          "title": "Turnos del día",
          "value": "3"
        },
        {
          "title": "Ventas del mes",
          "value": "$35000"
        },
        {
          "title": "Autos en taller",
          "value": "1"
        },
        {
          "title": "Clientes atendidos hoy",
          "value": "2"
        }
      ]
    }
    "###);
}

#[test]
fn test_unknown_screen_fails() {
    let shop = TestShop::new();

    shop.command()
        .args(["list", "presupuesto"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_console_refuses_without_terminal() {
    let shop = TestShop::new();

    shop.command()
        .arg("console")
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}
