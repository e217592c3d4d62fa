use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge, StatusLevel};

/// Prints results to stdout as plain text or pretty JSON
pub struct ConsoleRenderer {
    json_mode: bool,
    colors: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            colors: std::io::stdout().is_terminal(),
        }
    }

    fn badge_line(&self, badge: &StatusBadge) -> String {
        if !self.colors {
            return format!("{} {}", badge.icon(), badge.label);
        }
        let label = match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
            StatusLevel::Error => badge.label.red().bold().to_string(),
        };
        format!("{} {}", badge.icon(), label)
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            println!("{}", self.badge_line(badge));
            println!();
        }

        print!("{}", result.content);

        if !result.suggestions.is_empty() {
            let heading = if self.colors {
                "Tips:".yellow().bold().to_string()
            } else {
                "Tips:".to_string()
            };
            println!("\n{}", heading);
            for tip in &result.suggestions {
                print!("  • {}", tip.description);
                if let Some(cmd) = &tip.command {
                    if self.colors {
                        print!(": {}", cmd.cyan());
                    } else {
                        print!(": {}", cmd);
                    }
                }
                println!();
            }
        }

        Ok(())
    }
}
