pub mod text;

use is_terminal::IsTerminal;
use terminal_size::{Width, terminal_size};

/// Widest a table cell may get when printing to a terminal.
///
/// Piped output is never truncated.
pub fn cell_limit(columns: usize) -> Option<usize> {
    if !std::io::stdout().is_terminal() || columns == 0 {
        return None;
    }
    let (Width(width), _) = terminal_size()?;
    let gaps = 2 * columns.saturating_sub(1);
    Some(((width as usize).saturating_sub(gaps) / columns).max(8))
}
