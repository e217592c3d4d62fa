use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use taller_engine::NoticeLevel;

use super::Component;
use crate::presentation::renderers::tui::app::App;

pub(crate) struct StatusBarComponent;

impl Component for StatusBarComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let screen = app.console.screen();

        let line = if let Some(notice) = screen.and_then(|s| s.notice()) {
            let color = match notice.level {
                NoticeLevel::Success => Color::Green,
                NoticeLevel::Error => Color::Red,
            };
            Line::from(Span::styled(notice.text.clone(), Style::default().fg(color)))
        } else if let Some(status) = &app.status {
            Line::from(Span::styled(status.clone(), Style::default().fg(Color::Yellow)))
        } else {
            Line::from(Span::styled(
                key_hints(app),
                Style::default().fg(Color::DarkGray),
            ))
        };

        f.render_widget(Paragraph::new(line), area);
    }
}

fn key_hints(app: &App) -> &'static str {
    match app.console.screen() {
        None => "Tab/Shift-Tab pantallas · q salir",
        Some(screen) if screen.prompt().is_pending() => "s confirmar · n cancelar",
        Some(screen) if screen.form().is_open() => {
            "Tab campo · Enter guardar · Ctrl-S guardar · Supr quitar ítem · Esc cancelar"
        }
        Some(_) => {
            "Tab pantallas · ↑↓ fila · ←→ página · Espacio seleccionar · n agregar · e editar · d eliminar · q salir"
        }
    }
}
