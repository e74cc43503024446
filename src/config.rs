use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use tiergrid_core::Canvas;

const DEFAULT_CONFIG_PATH: &str = "config/editor.toml";

/// Editor session configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Canvas width new layouts are generated for.
    pub canvas_width: f64,
    /// Canvas height new layouts are generated for.
    pub canvas_height: f64,
    /// Directory the layout collection persists under.
    pub storage_dir: PathBuf,
    /// Endpoint serving the user directory as a JSON array.
    pub directory_url: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1920.0,
            canvas_height: 1080.0,
            storage_dir: PathBuf::from("data"),
            directory_url: "http://127.0.0.1:8080/database-1.json".to_string(),
        }
    }
}

impl EditorConfig {
    /// Load configuration from an explicit path, falling back to defaults on errors.
    pub fn load_from_path(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<EditorConfig>(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("Failed to parse {}: {err}. Using defaults", path.display());
                    EditorConfig::default()
                }
            },
            Err(err) => {
                if path != Path::new(DEFAULT_CONFIG_PATH) {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                } else if err.kind() != std::io::ErrorKind::NotFound {
                    warn!("Failed to read {}: {err}. Using defaults", path.display());
                }
                EditorConfig::default()
            }
        }
    }

    /// The canvas new layouts are generated for.
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.canvas_width, self.canvas_height)
    }
}
