use std::path::{Path, PathBuf};

use taller_engine::{CrudScreen, InMemoryRepository};
use taller_types::{EntityKind, Record, RecordId};
use tracing::{debug, info};

use crate::config::{Config, resolve_config_path};
use crate::dashboard::Dashboard;
use crate::nav::Route;
use crate::{Error, Result};

/// Entry point of the runtime: effective config plus screen mounting.
///
/// Every mount starts from the seed data; nothing outlives a screen.
#[derive(Debug, Clone)]
pub struct Workspace {
    config: Config,
    config_path: PathBuf,
}

impl Workspace {
    /// Resolve the config path and load it (defaults when absent)
    pub fn open(explicit_config: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_config)?;
        let config = Config::load_from(&config_path)?;
        debug!(path = %config_path.display(), "configuration loaded");
        Ok(Self {
            config,
            config_path,
        })
    }

    pub fn with_config(config: Config, config_path: PathBuf) -> Self {
        Self {
            config,
            config_path,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write the current config, creating parent directories
    pub fn init_config(&self) -> Result<&Path> {
        self.config.save_to(&self.config_path)?;
        info!(path = %self.config_path.display(), "configuration written");
        Ok(&self.config_path)
    }

    pub fn mount(&self, kind: EntityKind) -> CrudScreen {
        CrudScreen::new(
            taller_catalog::schema(kind),
            InMemoryRepository::seeded(taller_catalog::seed(kind)),
            self.config.screen_options(),
        )
    }

    pub fn mount_path(&self, path: &str) -> Result<CrudScreen> {
        match Route::parse(path)? {
            Route::Screen(kind) => Ok(self.mount(kind)),
            Route::Dashboard => Err(Error::Types(taller_types::Error::UnknownScreen(
                path.to_string(),
            ))),
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        Dashboard::compute()
    }
}

/// Look up a record on a mounted screen
pub fn find_record(screen: &CrudScreen, id: RecordId) -> Result<&Record> {
    screen
        .store()
        .get(id)
        .ok_or(Error::RecordNotFound {
            screen: screen.schema().kind,
            id,
        })
}
