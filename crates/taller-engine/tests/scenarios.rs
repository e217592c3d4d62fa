use taller_engine::{
    Action, CrudScreen, Error, InMemoryRepository, NoticeLevel, ScreenOptions, SelectionMode,
    SubmitOutcome,
};
use taller_types::{EntityKind, RecordId};

fn mount(kind: EntityKind) -> CrudScreen {
    mount_with(kind, ScreenOptions::default())
}

fn mount_with(kind: EntityKind, options: ScreenOptions) -> CrudScreen {
    CrudScreen::new(
        taller_catalog::schema(kind),
        InMemoryRepository::seeded(taller_catalog::seed(kind)),
        options,
    )
}

fn id(n: u32) -> RecordId {
    RecordId::new(n)
}

#[test]
fn test_calles_create_appends_eleventh_street() {
    let mut screen = mount(EntityKind::Streets);
    assert_eq!(screen.records().len(), 10);

    screen.begin_create();
    screen.set_field("nombre", "Lavalle").unwrap();
    let outcome = screen.submit_form().unwrap();

    let record = outcome.record().unwrap();
    assert_eq!(record.id, id(11));
    assert_eq!(record.text("nombre"), Some("Lavalle"));
    assert_eq!(screen.records().len(), 11);
}

#[test]
fn test_mecanicos_edit_only_touches_selected_record() {
    let mut screen = mount(EntityKind::Mechanics);
    let untouched = screen.records()[1].clone();

    screen.select(id(1));
    screen.begin_edit().unwrap();
    assert_eq!(screen.form().value("nombre"), Some("Alberto Gonzalez"));
    screen.set_field("telefono", "555").unwrap();
    let outcome = screen.submit_form().unwrap();

    assert!(matches!(outcome, SubmitOutcome::Updated(_)));
    let first = &screen.records()[0];
    assert_eq!(first.id, id(1));
    assert_eq!(first.text("telefono"), Some("555"));
    assert_eq!(first.text("email"), Some("albert@example.com"));
    assert_eq!(screen.records()[1], untouched);
    assert_eq!(screen.records().len(), 2);
}

#[test]
fn test_proveedores_delete_clears_selection() {
    let mut screen = mount(EntityKind::Suppliers);

    screen.select(id(2));
    assert_eq!(screen.request_delete().unwrap(), 1);
    assert!(screen.prompt().is_pending());
    assert_eq!(screen.confirm_delete().unwrap(), 1);

    let ids: Vec<RecordId> = screen.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![id(1)]);
    assert!(screen.selection().is_empty());
    assert!(!screen.prompt().is_pending());
    assert_eq!(
        screen.notice().map(|n| n.text.as_str()),
        Some("Proveedor(es) eliminado(s)")
    );
}

#[test]
fn test_servicios_empty_nombre_is_blocked() {
    let mut screen = mount(EntityKind::Services);
    let before = screen.records().to_vec();

    screen.begin_create();
    screen.set_field("importe", "5000").unwrap();
    let err = screen.submit_form().unwrap_err();

    match err {
        Error::Validation(errors) => {
            assert_eq!(errors.for_field("nombre"), Some("Ingrese el nombre"))
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(screen.records(), before.as_slice());
    assert!(screen.form().is_open());
}

#[test]
fn test_actions_follow_selection_size() {
    let mut screen = mount_with(
        EntityKind::Parts,
        ScreenOptions {
            selection_mode: SelectionMode::Multiple,
            ..ScreenOptions::default()
        },
    );
    assert!(!screen.can_edit());
    assert!(!screen.can_delete());
    assert_eq!(
        screen.request_delete(),
        Err(Error::Unavailable {
            action: Action::Delete,
            selected: 0
        })
    );

    screen.select(id(1));
    assert!(screen.can_edit());
    screen.select(id(2));
    assert!(!screen.can_edit());
    assert!(screen.can_delete());
    assert!(matches!(
        screen.begin_edit(),
        Err(Error::Unavailable {
            action: Action::Edit,
            selected: 2
        })
    ));
}

#[test]
fn test_delete_is_idempotent_for_absent_ids() {
    let mut screen = mount(EntityKind::Streets);
    screen.select(id(4));
    screen.request_delete().unwrap();
    screen.confirm_delete().unwrap();
    let after_first = screen.records().to_vec();

    // The id is gone, so it can no longer be selected or deleted again
    assert!(!screen.select(id(4)));
    assert_eq!(screen.records(), after_first.as_slice());
    assert_eq!(screen.records().len(), 9);
}

#[test]
fn test_create_after_delete_uses_max_plus_one() {
    let mut screen = mount(EntityKind::Streets);
    screen.select(id(5));
    screen.request_delete().unwrap();
    screen.confirm_delete().unwrap();

    screen.begin_create();
    screen.set_field("nombre", "Lavalle").unwrap();
    let created = screen.submit_form().unwrap();
    assert_eq!(created.record().map(|r| r.id), Some(id(11)));
}

#[test]
fn test_orden_compra_without_items_is_rejected_with_notice() {
    let mut screen = mount(EntityKind::PurchaseOrders);
    screen.begin_create();
    screen.set_field("idProveedor", "2").unwrap();
    screen.set_field("fecha", "2025-09-10").unwrap();

    assert!(matches!(screen.submit_form(), Err(Error::Rejected(_))));
    assert!(screen.form().is_open());
    assert_eq!(screen.notice().map(|n| n.level), Some(NoticeLevel::Error));
    assert_eq!(screen.records().len(), 1);

    let item = screen
        .add_line("repuestos", Some(id(3)), 2, 30000)
        .unwrap();
    assert_eq!(item.label, "Amortiguadores");
    let created = screen.submit_form().unwrap();
    let record = created.record().unwrap();
    assert_eq!(record.id, id(2));
    assert_eq!(record.lines("repuestos").len(), 1);
}

#[test]
fn test_orden_trabajo_edit_keeps_line_items() {
    let mut screen = mount(EntityKind::WorkOrders);
    screen.select(id(1));
    screen.begin_edit().unwrap();
    screen.set_field("estado", "completado").unwrap();
    screen
        .add_line("servicios", Some(id(2)), 1, 8000)
        .unwrap();
    screen.submit_form().unwrap();

    let order = &screen.records()[0];
    assert_eq!(order.text("estado"), Some("Completado"));
    let seqs: Vec<u32> = order.lines("servicios").iter().map(|l| l.seq).collect();
    assert_eq!(seqs, vec![1, 2]);
    assert_eq!(order.lines("repuestos").len(), 1);
}

#[test]
fn test_reference_check_is_opt_in() {
    let create = |check_references: bool| {
        let mut screen = mount_with(
            EntityKind::ClientComplaints,
            ScreenOptions {
                check_references,
                ..ScreenOptions::default()
            },
        );
        screen.begin_create();
        screen.set_field("idCliente", "42").unwrap();
        screen.set_field("fecha", "2025-09-01").unwrap();
        screen.submit_form()
    };

    assert!(create(false).is_ok());
    assert!(matches!(create(true), Err(Error::Validation(_))));
}

#[test]
fn test_cancel_form_discards_input() {
    let mut screen = mount(EntityKind::CarBrands);
    screen.begin_create();
    screen.set_field("nombre", "Fiat").unwrap();
    screen.cancel_form();

    assert!(!screen.form().is_open());
    assert_eq!(screen.records().len(), 8);
    assert_eq!(screen.submit_form(), Err(Error::NothingOpen));
}

#[test]
fn test_unchanged_edit_keeps_every_seed_record() {
    for kind in EntityKind::ALL {
        let seed = taller_catalog::seed(kind);
        let mut screen = mount(kind);

        for record in &seed {
            assert!(screen.select(record.id), "{} {} not selectable", kind, record.id);
            screen.begin_edit().unwrap();
            let outcome = screen.submit_form().unwrap();

            assert_eq!(
                outcome.record(),
                Some(record),
                "{} {} changed on an unchanged edit",
                kind,
                record.id
            );
        }
        assert_eq!(screen.records(), seed.as_slice());
    }
}

#[test]
fn test_edit_one_field_keeps_the_others_verbatim() {
    let mut screen = mount(EntityKind::PurchaseVouchers);
    let before = screen.records()[0].clone();

    screen.select(before.id);
    screen.begin_edit().unwrap();
    screen.set_field("total", "999").unwrap();
    screen.submit_form().unwrap();

    let after = &screen.records()[0];
    assert_eq!(after.integer("total"), Some(999));
    assert_eq!(after.text("observaciones"), before.text("observaciones"));
}
