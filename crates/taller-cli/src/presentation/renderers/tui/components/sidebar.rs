use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use taller_runtime::SHELL_TITLE;

use super::Component;
use crate::presentation::renderers::tui::app::App;

pub(crate) struct SidebarComponent;

impl Component for SidebarComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let current = app.console.route_index();

        let items: Vec<ListItem> = app
            .console
            .routes()
            .iter()
            .enumerate()
            .map(|(idx, route)| {
                if idx == current {
                    ListItem::new(Line::from(Span::styled(
                        format!("▸ {}", route.title()),
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )))
                } else {
                    ListItem::new(Line::from(format!("  {}", route.title())))
                }
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", SHELL_TITLE),
                Style::default().add_modifier(Modifier::BOLD),
            ));

        f.render_widget(List::new(items).block(block), area);
    }
}
