//! Renderer configuration (`folio.toml`).
//!
//! ```toml
//! data = "data.json"
//! output = "index.html"
//! title = "Ada Lovelace"
//! page_path = "/"
//!
//! [render]
//! emit_ids = false
//! minify = true
//! ```
//!
//! Every key is optional. A missing file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FolioError, FolioResult};
use crate::loader::{DEFAULT_DATA_FILE, DataSource};
use crate::render::RenderConfig;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

/// Default output file name
pub const DEFAULT_OUTPUT_FILE: &str = "index.html";

/// Default page title
pub const DEFAULT_TITLE: &str = "Portfolio";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FolioConfig {
    /// Portfolio document: a path (relative to the output's directory) or URL
    pub data: String,
    /// Where the rendered page is written
    pub output: String,
    /// Page title and footer name
    pub title: String,
    /// Path the page is served at; seeds stable ids
    pub page_path: String,
    pub render: RenderOptions,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Emit `data-folio-id` attributes
    pub emit_ids: bool,
    /// Drop newlines between block elements
    pub minify: bool,
}

impl RenderOptions {
    pub fn to_render_config(self) -> RenderConfig {
        RenderConfig::new(self.emit_ids, self.minify)
    }
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data: DEFAULT_DATA_FILE.to_string(),
            output: DEFAULT_OUTPUT_FILE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            page_path: "/".to_string(),
            render: RenderOptions::default(),
        }
    }
}

impl FolioConfig {
    /// Load a configuration file; a file that does not exist yields defaults.
    pub fn load(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(err) => return Err(FolioError::io(path, err)),
        };
        toml::from_str(&content)
            .map_err(|err| FolioError::Config(format!("failed to parse {}: {err}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> FolioResult<Self> {
        toml::from_str(content).map_err(FolioError::config)
    }

    /// Path of the rendered page
    pub fn output_path(&self) -> PathBuf {
        PathBuf::from(&self.output)
    }

    /// The portfolio document source, with a relative path resolved against
    /// the directory the page is written to.
    pub fn data_source(&self) -> DataSource {
        let output = self.output_path();
        let page_dir = output.parent().unwrap_or(Path::new(""));
        DataSource::parse(&self.data).resolve_against(page_dir)
    }

    /// Serialize to TOML text
    pub fn to_toml_string(&self) -> FolioResult<String> {
        toml::to_string_pretty(self).map_err(FolioError::config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FolioConfig::default();
        assert_eq!(config.data, "data.json");
        assert_eq!(config.output, "index.html");
        assert_eq!(config.page_path, "/");
        assert!(!config.render.emit_ids);
        assert!(!config.render.minify);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = FolioConfig::from_toml("title = \"Ada\"\n[render]\nminify = true\n").unwrap();
        assert_eq!(config.title, "Ada");
        assert_eq!(config.data, "data.json");
        assert!(config.render.minify);
        assert!(!config.render.emit_ids);
    }

    #[test]
    fn test_data_source_resolves_next_to_output() {
        let mut config = FolioConfig::default();
        config.output = "site/public/index.html".into();
        assert_eq!(
            config.data_source(),
            DataSource::File("site/public/data.json".into())
        );

        config.data = "/srv/data.json".into();
        assert_eq!(config.data_source(), DataSource::File("/srv/data.json".into()));

        config.output = "index.html".into();
        config.data = "data.json".into();
        assert_eq!(config.data_source(), DataSource::File("data.json".into()));
    }

    #[test]
    fn test_unknown_key_is_config_error() {
        let err = FolioConfig::from_toml("datta = \"x.json\"").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::load(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, FolioConfig::default());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let mut expected = FolioConfig::default();
        expected.data = "https://example.com/data.json".into();
        expected.render.emit_ids = true;
        std::fs::write(&path, expected.to_toml_string().unwrap()).unwrap();

        assert_eq!(FolioConfig::load(&path).unwrap(), expected);
    }

    #[test]
    fn test_malformed_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "data = [").unwrap();

        match FolioConfig::load(&path) {
            Err(FolioError::Config(msg)) => assert!(msg.contains(DEFAULT_CONFIG_FILE)),
            other => panic!("expected Config error, got {other:?}"),
        }
    }
}
