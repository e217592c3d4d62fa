use taller_engine::{CrudScreen, Notice, ValidationErrors};
use taller_types::{EntitySchema, Record};

use crate::args::hints::fmt;
use crate::presentation::view_models::{
    CommandResultViewModel, DeleteResultViewModel, FieldEntryViewModel, FieldErrorViewModel,
    Guidance, LineItemViewModel, LineSectionViewModel, MutationKind, MutationViewModel,
    RecordDetailViewModel, RecordRowViewModel, RecordTableViewModel, StatusBadge,
    ValidationFailureViewModel,
};

pub fn present_record_table(screen: &CrudScreen) -> CommandResultViewModel<RecordTableViewModel> {
    let schema = screen.schema();
    let path = schema.kind.path();
    let page = screen.page();

    let rows: Vec<RecordRowViewModel> = screen
        .visible_records()
        .iter()
        .map(|record| RecordRowViewModel {
            id: record.id.get(),
            cells: schema.cells(record),
        })
        .collect();

    let first_id = rows.first().map(|row| row.id);

    let content = RecordTableViewModel {
        screen: path.to_string(),
        title: schema.title().to_string(),
        columns: schema
            .columns()
            .iter()
            .map(|column| column.title.to_string())
            .collect(),
        rows,
        page: page.number,
        total_pages: page.total_pages,
        total_records: screen.records().len(),
    };

    let mut result = CommandResultViewModel::new(content);

    if page.has_next() {
        result = result.with_suggestion(
            Guidance::new("Next page").with_command(fmt::list_page(path, page.number + 1)),
        );
    }
    match first_id {
        Some(id) => {
            result = result
                .with_suggestion(Guidance::new("Open a record").with_command(fmt::show(path, id)));
        }
        None => {
            result = result
                .with_suggestion(Guidance::new("Add a record").with_command(fmt::create(path)));
        }
    }

    result
}

/// Field values and line sections of one record, lookups resolved
pub fn record_detail(schema: &EntitySchema, record: &Record) -> RecordDetailViewModel {
    let fields = schema
        .fields
        .iter()
        .map(|spec| FieldEntryViewModel {
            key: spec.key.to_string(),
            label: spec.label.to_string(),
            value: record
                .get(spec.key)
                .map(|value| schema.display_value(spec.key, value))
                .unwrap_or_default(),
        })
        .collect();

    let sections = schema
        .sections
        .iter()
        .map(|section| {
            let items: Vec<LineItemViewModel> = record
                .lines(section.key)
                .iter()
                .map(|item| LineItemViewModel {
                    seq: item.seq,
                    item_id: item.item_id.get(),
                    item: item.label.clone(),
                    quantity: item.quantity,
                    amount: item.amount,
                })
                .collect();
            LineSectionViewModel {
                key: section.key.to_string(),
                title: section.title.to_string(),
                item_label: section.item_label.to_string(),
                total: items.iter().map(|item| item.amount).sum(),
                items,
            }
        })
        .collect();

    RecordDetailViewModel {
        screen: schema.kind.path().to_string(),
        title: schema.title().to_string(),
        id: record.id.get(),
        fields,
        sections,
    }
}

pub fn present_record_detail(
    schema: &EntitySchema,
    record: &Record,
) -> CommandResultViewModel<RecordDetailViewModel> {
    CommandResultViewModel::new(record_detail(schema, record))
        .with_suggestion(Guidance::new("Back to the list").with_command(fmt::list(schema.kind.path())))
}

pub fn present_mutation(
    schema: &EntitySchema,
    action: MutationKind,
    record: &Record,
    notice: Option<&Notice>,
) -> CommandResultViewModel<MutationViewModel> {
    let content = MutationViewModel {
        action,
        record: record_detail(schema, record),
    };

    let mut result = CommandResultViewModel::new(content);
    if let Some(notice) = notice {
        result = result.with_badge(StatusBadge::from_notice(notice));
    }
    result
}

pub fn present_delete(
    screen: &CrudScreen,
    requested: Vec<u32>,
    missing: Vec<u32>,
    removed: Option<usize>,
) -> CommandResultViewModel<DeleteResultViewModel> {
    let path = screen.schema().kind.path();
    let content = DeleteResultViewModel {
        screen: path.to_string(),
        confirmed: removed.is_some(),
        missing,
        removed: removed.unwrap_or(0),
        remaining: screen.records().len(),
        requested,
    };

    match (removed, screen.notice()) {
        (Some(_), Some(notice)) => {
            CommandResultViewModel::new(content).with_badge(StatusBadge::from_notice(notice))
        }
        (Some(_), None) => CommandResultViewModel::new(content),
        (None, _) => {
            let confirm = fmt::delete_confirmed(path, &content.requested);
            CommandResultViewModel::new(content)
                .with_badge(StatusBadge::warning("Eliminación cancelada"))
                .with_suggestion(Guidance::new("Delete without prompting").with_command(confirm))
        }
    }
}

pub fn present_validation_failure(
    schema: &EntitySchema,
    errors: &ValidationErrors,
) -> CommandResultViewModel<ValidationFailureViewModel> {
    let errors = errors
        .iter()
        .map(|error| FieldErrorViewModel {
            label: schema
                .field_spec(&error.field)
                .map(|spec| spec.label.to_string())
                .unwrap_or_else(|_| error.field.clone()),
            field: error.field.clone(),
            message: error.message.clone(),
        })
        .collect();

    failure(schema, errors, None)
}

/// Errors raised by the line editor of `section`
pub fn present_line_failure(
    schema: &EntitySchema,
    section: &str,
    errors: &ValidationErrors,
) -> CommandResultViewModel<ValidationFailureViewModel> {
    let item_label = schema
        .section_spec(section)
        .map(|spec| spec.item_label)
        .unwrap_or("Item");

    let errors = errors
        .iter()
        .map(|error| FieldErrorViewModel {
            label: match error.field.as_str() {
                "item" => item_label.to_string(),
                "quantity" => "Cantidad".to_string(),
                "amount" => "Importe".to_string(),
                other => other.to_string(),
            },
            field: format!("{}.{}", section, error.field),
            message: error.message.clone(),
        })
        .collect();

    failure(schema, errors, None)
}

/// Business-rule rejection surfaced as the screen's error notice
pub fn present_rejection(
    schema: &EntitySchema,
    notice: &Notice,
) -> CommandResultViewModel<ValidationFailureViewModel> {
    failure(schema, Vec::new(), Some(notice))
}

fn failure(
    schema: &EntitySchema,
    errors: Vec<FieldErrorViewModel>,
    notice: Option<&Notice>,
) -> CommandResultViewModel<ValidationFailureViewModel> {
    let content = ValidationFailureViewModel {
        screen: schema.kind.path().to_string(),
        title: schema.title().to_string(),
        errors,
        rejection: notice.map(|n| n.text.clone()),
    };

    let badge = match notice {
        Some(notice) => StatusBadge::from_notice(notice),
        None => StatusBadge::error("Revise los campos del formulario"),
    };
    CommandResultViewModel::new(content).with_badge(badge)
}
