//! Interactive console: sidebar navigation, paged tables, modal forms and
//! delete confirmation over a `Console`.

mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use taller_runtime::Console;
use tracing::debug;

use app::App;

pub fn run(console: Console) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut app = App::new(console);
    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    debug!(route = %app.console.route(), "console closed");
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let tick_rate = Duration::from_millis(250);

    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(tick_rate)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
    }

    Ok(())
}
