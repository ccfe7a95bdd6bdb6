use crate::display::DisplayOptions;
use crate::error::CohortError;
use crate::pagination::Paginator;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const SETTINGS_FILE_NAME: &str = "settings.json";
const DEFAULT_ITEMS_PER_PAGE: usize = 10;

/// User-level list settings, stored as JSON in the platform config directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub items_per_page: usize,
    pub display: DisplayOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            display: DisplayOptions::default(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, CohortError> {
        let contents = std::fs::read_to_string(path)?;
        let settings: Settings = serde_json::from_str(&contents)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load from the config directory, falling back to defaults when the file
    /// is missing or unusable
    pub fn load_or_default() -> Self {
        let Some(path) = settings_path() else {
            warn!("No config directory available, using default settings");
            return Self::default();
        };
        Self::load_or_default_from(&path)
    }

    /// Like `load_or_default`, for an explicit settings file
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), CohortError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), CohortError> {
        if self.items_per_page == 0 {
            return Err(CohortError::InvalidItemsPerPage(self.items_per_page));
        }
        self.display.validate()
    }

    pub fn paginator(&self) -> Result<Paginator, CohortError> {
        Paginator::new(self.items_per_page)
    }
}

pub fn settings_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "cohort", "cohort")
        .map(|dirs| dirs.config_dir().join(SETTINGS_FILE_NAME))
}
