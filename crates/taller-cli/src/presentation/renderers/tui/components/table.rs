use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph, Row, Table},
};
use taller_engine::{CrudScreen, SelectionMode};

use super::Component;
use crate::presentation::renderers::tui::app::App;

pub(crate) struct TableComponent;

impl Component for TableComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let Some(screen) = app.console.screen() else {
            return;
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                title(screen),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));

        let records = screen.visible_records();
        if records.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "Sin registros. Presione n para agregar uno.",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        let schema = screen.schema();
        let columns = schema.columns();
        let mode = screen.selection().mode();

        let header = Row::new(
            std::iter::once(String::new()).chain(columns.iter().map(|c| c.title.to_string())),
        )
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .map(|(idx, record)| {
                let marker = marker(mode, screen.selection().contains(record.id));
                let cells = std::iter::once(marker.to_string()).chain(schema.cells(record));
                let row = Row::new(cells);
                if idx == app.cursor {
                    row.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    row
                }
            })
            .collect();

        let widths: Vec<Constraint> = std::iter::once(Constraint::Length(3))
            .chain(columns.iter().map(|_| Constraint::Fill(1)))
            .collect();

        let table = Table::new(rows, widths).header(header).block(block);
        f.render_widget(table, area);
    }
}

fn title(screen: &CrudScreen) -> String {
    let page = screen.page();
    let selected = screen.selection().len();
    format!(
        " {} · página {}/{} · {} seleccionado(s) ",
        screen.schema().title(),
        page.number,
        page.total_pages,
        selected
    )
}

fn marker(mode: SelectionMode, selected: bool) -> &'static str {
    match (mode, selected) {
        (SelectionMode::Single, true) => "(•)",
        (SelectionMode::Single, false) => "( )",
        (SelectionMode::Multiple, true) => "[x]",
        (SelectionMode::Multiple, false) => "[ ]",
    }
}
