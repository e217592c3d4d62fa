use taller_engine::SelectionMode;
use taller_runtime::{Config, Workspace};

use crate::args::hints::cmd;
use crate::presentation::view_models::{
    CommandResultViewModel, ConfigInitViewModel, ConfigViewModel, Guidance, StatusBadge,
};

pub fn present_config(workspace: &Workspace) -> CommandResultViewModel<ConfigViewModel> {
    let config = workspace.config();
    let exists = workspace.config_path().exists();

    let content = ConfigViewModel {
        path: workspace.config_path().display().to_string(),
        exists,
        page_size: config.list.page_size,
        selection_mode: match config.selection.mode {
            SelectionMode::Single => "single".to_string(),
            SelectionMode::Multiple => "multiple".to_string(),
        },
        require_line_items: config.forms.require_line_items,
        check_references: config.forms.check_references,
    };

    let result = CommandResultViewModel::new(content);
    if exists {
        result
    } else {
        result.with_suggestion(Guidance::new("Write the defaults").with_command(cmd::CONFIG_INIT))
    }
}

pub fn present_config_init(
    path: String,
    config: &Config,
    overwritten: bool,
) -> taller_runtime::Result<CommandResultViewModel<ConfigInitViewModel>> {
    let content = ConfigInitViewModel {
        path,
        overwritten,
        toml: config.to_toml()?,
    };

    let label = if overwritten {
        "Configuration overwritten"
    } else {
        "Configuration written"
    };

    Ok(CommandResultViewModel::new(content)
        .with_badge(StatusBadge::success(label))
        .with_suggestion(Guidance::new("Review it").with_command(cmd::CONFIG_SHOW)))
}
