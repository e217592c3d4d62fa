use std::fmt;

use crate::presentation::formatters::cell_limit;
use crate::presentation::formatters::text::{column_widths, table_row};
use crate::presentation::view_models::{
    DeleteResultViewModel, LineSectionViewModel, MutationViewModel, RecordDetailViewModel,
    RecordTableViewModel, ValidationFailureViewModel,
};

// --------------------------------------------------------
// Record Table View
// --------------------------------------------------------

pub struct RecordTableView<'a> {
    data: &'a RecordTableViewModel,
}

impl<'a> RecordTableView<'a> {
    pub fn new(data: &'a RecordTableViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecordTableView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "{} (page {}/{}, {} records)",
            self.data.title, self.data.page, self.data.total_pages, self.data.total_records
        )?;
        writeln!(f)?;

        if self.data.rows.is_empty() {
            writeln!(f, "No records.")?;
            return Ok(());
        }

        let rows: Vec<Vec<String>> = self.data.rows.iter().map(|r| r.cells.clone()).collect();
        let widths = column_widths(
            &self.data.columns,
            &rows,
            cell_limit(self.data.columns.len()),
        );

        writeln!(f, "{}", table_row(&self.data.columns, &widths))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        writeln!(f, "{}", rule.join("  "))?;
        for row in &rows {
            writeln!(f, "{}", table_row(row, &widths))?;
        }
        Ok(())
    }
}

// --------------------------------------------------------
// Record Detail View
// --------------------------------------------------------

pub struct RecordDetailView<'a> {
    data: &'a RecordDetailViewModel,
}

impl<'a> RecordDetailView<'a> {
    pub fn new(data: &'a RecordDetailViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for RecordDetailView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} #{}", self.data.title, self.data.id)?;
        writeln!(f)?;

        let label_width = self
            .data
            .fields
            .iter()
            .map(|field| field.label.chars().count())
            .max()
            .unwrap_or(0);

        for field in &self.data.fields {
            writeln!(
                f,
                "  {:<width$}  {}",
                field.label,
                field.value,
                width = label_width
            )?;
        }

        for section in &self.data.sections {
            writeln!(f)?;
            write_section(f, section)?;
        }
        Ok(())
    }
}

fn write_section(f: &mut fmt::Formatter, section: &LineSectionViewModel) -> fmt::Result {
    writeln!(f, "{} ({})", section.title, section.items.len())?;
    if section.items.is_empty() {
        writeln!(f, "  (no items)")?;
        return Ok(());
    }

    let headers = vec![
        "#".to_string(),
        section.item_label.clone(),
        "Cantidad".to_string(),
        "Importe".to_string(),
    ];
    let rows: Vec<Vec<String>> = section
        .items
        .iter()
        .map(|item| {
            vec![
                item.seq.to_string(),
                item.item.clone(),
                item.quantity.to_string(),
                item.amount.to_string(),
            ]
        })
        .collect();
    let widths = column_widths(&headers, &rows, None);

    writeln!(f, "  {}", table_row(&headers, &widths))?;
    for row in &rows {
        writeln!(f, "  {}", table_row(row, &widths))?;
    }
    writeln!(f, "  Total: {}", section.total)
}

// --------------------------------------------------------
// Mutation Views
// --------------------------------------------------------

pub struct MutationView<'a> {
    data: &'a MutationViewModel,
}

impl<'a> MutationView<'a> {
    pub fn new(data: &'a MutationViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for MutationView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", RecordDetailView::new(&self.data.record))
    }
}

pub struct DeleteResultView<'a> {
    data: &'a DeleteResultViewModel,
}

impl<'a> DeleteResultView<'a> {
    pub fn new(data: &'a DeleteResultViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for DeleteResultView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.data.confirmed {
            writeln!(f, "Nothing was deleted from {}.", self.data.screen)?;
            return Ok(());
        }

        writeln!(
            f,
            "Removed {} record(s) from {}; {} remain.",
            self.data.removed, self.data.screen, self.data.remaining
        )?;
        if !self.data.missing.is_empty() {
            let ids: Vec<String> = self.data.missing.iter().map(|id| id.to_string()).collect();
            writeln!(f, "Not found: {}", ids.join(", "))?;
        }
        Ok(())
    }
}

pub struct ValidationFailureView<'a> {
    data: &'a ValidationFailureViewModel,
}

impl<'a> ValidationFailureView<'a> {
    pub fn new(data: &'a ValidationFailureViewModel) -> Self {
        Self { data }
    }
}

impl<'a> fmt::Display for ValidationFailureView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}: the form was not submitted", self.data.title)?;
        if let Some(rejection) = &self.data.rejection {
            writeln!(f, "  {}", rejection)?;
        }
        for error in &self.data.errors {
            writeln!(f, "  {}: {}", error.label, error.message)?;
        }
        Ok(())
    }
}
