use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use taller_engine::FormMode;
use taller_types::{EntitySchema, FieldKind, FieldSpec};

use super::{Component, centered};
use crate::presentation::renderers::tui::app::{App, FormRow};

pub(crate) struct FormComponent;

impl Component for FormComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let Some(screen) = app.console.screen() else {
            return;
        };
        let form = screen.form();
        let Some(mode) = form.mode() else {
            return;
        };
        let schema = screen.schema();
        let current = app.current_row();

        let mut lines: Vec<Line> = Vec::new();

        for spec in &schema.fields {
            let focused = current == Some(FormRow::Field(spec.key));
            let value = form.value(spec.key).unwrap_or_default();

            lines.push(Line::from(vec![
                Span::raw(if focused { "▸ " } else { "  " }),
                Span::styled(
                    format!("{}: ", spec.label),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{}{}", value, if focused { "▏" } else { "" }),
                    field_style(focused),
                ),
            ]));

            if let Some(hint) = hint(schema, spec) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", hint),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            if let Some(message) = form.errors().and_then(|e| e.for_field(spec.key)) {
                lines.push(Line::from(Span::styled(
                    format!("    {}", message),
                    Style::default().fg(Color::Red),
                )));
            }
        }

        for section in &schema.sections {
            let focused = current == Some(FormRow::Section(section.key));
            let items = form.lines(section.key);

            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::raw(if focused { "▸ " } else { "  " }),
                Span::styled(
                    format!("{} ({})", section.title, items.len()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]));
            for item in items {
                lines.push(Line::from(format!(
                    "    #{} {} x{}  ${}",
                    item.seq, item.label, item.quantity, item.amount
                )));
            }

            let draft = app.drafts.get(section.key).map(String::as_str).unwrap_or("");
            lines.push(Line::from(Span::styled(
                format!("    + {}{}", draft, if focused { "▏" } else { "" }),
                field_style(focused),
            )));
            let catalog: Vec<String> = section
                .catalog
                .entries
                .iter()
                .map(|e| format!("{}={}", e.id, e.label))
                .collect();
            lines.push(Line::from(Span::styled(
                format!("    {}: {}", section.item_label, catalog.join(", ")),
                Style::default().fg(Color::DarkGray),
            )));
        }

        let title = match mode {
            FormMode::Create => format!(" Agregar · {} ", schema.title()),
            FormMode::Edit(id) => format!(" Editar · {} #{} ", schema.title(), id),
        };

        let popup = centered(area, 70, 80);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow))
                        .title(Span::styled(
                            title,
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )),
                ),
            popup,
        );
    }
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    }
}

/// Accepted values for choice and reference fields
fn hint(schema: &EntitySchema, spec: &FieldSpec) -> Option<String> {
    match &spec.kind {
        FieldKind::Choice { options } => Some(options.join(" / ")),
        FieldKind::Reference { lookup } => {
            let list = schema.lookup_list(lookup)?;
            let entries: Vec<String> = list
                .entries
                .iter()
                .map(|e| format!("{}={}", e.id, e.label))
                .collect();
            Some(entries.join(", "))
        }
        FieldKind::Date => Some("AAAA-MM-DD".to_string()),
        FieldKind::Time => Some("HH:MM".to_string()),
        _ => None,
    }
}
