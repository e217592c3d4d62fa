use ratatui::{
    Frame,
    layout::{Constraint, Layout},
};

use super::app::App;
use super::components::{
    Component, ConfirmComponent, DashboardComponent, FormComponent, SidebarComponent,
    StatusBarComponent, TableComponent,
};

pub(crate) fn draw(f: &mut Frame, app: &App) {
    let main_chunks = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).split(f.area());
    let body = Layout::horizontal([Constraint::Length(28), Constraint::Min(0)]).split(main_chunks[0]);

    SidebarComponent.render(f, body[0], app);

    match app.console.screen() {
        None => DashboardComponent.render(f, body[1], app),
        Some(screen) => {
            TableComponent.render(f, body[1], app);
            if screen.form().is_open() {
                FormComponent.render(f, body[1], app);
            }
            if screen.prompt().is_pending() {
                ConfirmComponent.render(f, body[1], app);
            }
        }
    }

    StatusBarComponent.render(f, main_chunks[1], app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;
    use taller_runtime::{Config, Console, Route, Workspace};
    use taller_types::EntityKind;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn app() -> App {
        App::new(Console::new(Workspace::with_config(
            Config::default(),
            PathBuf::from("/nonexistent/config.toml"),
        )))
    }

    #[test]
    fn test_dashboard_frame() {
        let screen = render(&app());
        assert!(screen.contains("Taller Mecánico"));
        assert!(screen.contains("Turnos del día"));
        assert!(screen.contains("$35000"));
    }

    #[test]
    fn test_table_and_prompt_frame() {
        let mut app = app();
        app.console.navigate(Route::Screen(EntityKind::Suppliers));

        let screen = render(&app);
        assert!(screen.contains("Casa de repuestos 1"));
        assert!(screen.contains("página 1/1"));

        let crud = app.console.screen_mut().unwrap();
        crud.select(taller_types::RecordId::new(2));
        crud.request_delete().unwrap();
        let screen = render(&app);
        assert!(screen.contains("¿Eliminar proveedor(es)?"));
    }
}
