use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use taller_engine::ConfirmPrompt;

use super::{Component, centered};
use crate::presentation::renderers::tui::app::App;

pub(crate) struct ConfirmComponent;

impl Component for ConfirmComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let Some(screen) = app.console.screen() else {
            return;
        };
        let ConfirmPrompt::Pending { ids, title, body } = screen.prompt() else {
            return;
        };

        let lines = vec![
            Line::from(body.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} registro(s) seleccionado(s)", ids.len()),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("[s] ", Style::default().fg(Color::Red)),
                Span::raw("Eliminar   "),
                Span::styled("[n] ", Style::default().fg(Color::Green)),
                Span::raw("Cancelar"),
            ]),
        ];

        let popup = centered(area, 50, 30);
        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(Span::styled(
                        format!(" {} ", title),
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
            ),
            popup,
        );
    }
}
