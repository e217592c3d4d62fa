use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::Component;
use crate::presentation::presenters::dashboard_view_model;
use crate::presentation::renderers::tui::app::App;

pub(crate) struct DashboardComponent;

impl Component for DashboardComponent {
    fn render(&self, f: &mut Frame, area: Rect, app: &App) {
        let data = dashboard_view_model(app.console.dashboard());

        let title = match &data.date {
            Some(date) => format!(" Dashboard · {} ", date),
            None => " Dashboard ".to_string(),
        };
        let outer = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        if data.cards.is_empty() {
            return;
        }

        let rows = Layout::vertical([Constraint::Length(5), Constraint::Min(0)]).split(inner);
        let constraints = vec![Constraint::Ratio(1, data.cards.len() as u32); data.cards.len()];
        let slots = Layout::horizontal(constraints).split(rows[0]);

        for (card, slot) in data.cards.iter().zip(slots.iter()) {
            let body = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.value.clone(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                )),
            ])
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(card.title.clone()),
            );
            f.render_widget(body, *slot);
        }
    }
}
