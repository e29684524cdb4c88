//! Configuration loading from `.bindatarc.toml`.
//!
//! Every setting can also be given on the command line; flags win over the
//! file. A config file lets a build keep its resource layout in one place.
//!
//! # Example Configuration
//!
//! ```toml
//! [generator]
//! dirs = ["assets", "third_party/fonts"]
//! output = "src/generated/BinaryData.h"
//! namespace = "BinaryData"
//! target = "cpp"
//! on_collision = "error"
//! manifest = "build/assets.json"
//!
//! [scanner]
//! exclude = ["*.psd", "drafts/"]
//! respect_gitignore = false
//!
//! [emit]
//! bytes_per_line = 16
//! size_accessor = true
//! table_name = "data"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use anyhow::{Context, Result};
use bindata_core::{CollisionPolicy, Target};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".bindatarc.toml";

/// Root configuration structure loaded from `.bindatarc.toml`.
///
/// All sections are optional and will use defaults if not specified.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct BindataConfig {
    /// What to embed and where to write it.
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Which files the walker reports.
    #[serde(default)]
    pub scanner: ScannerConfig,

    /// Shape of the generated source.
    #[serde(default)]
    pub emit: EmitConfig,

    /// Report formatting preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Inputs and outputs of a generation run.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Scan roots, relative to the working directory.
    #[serde(default)]
    pub dirs: Vec<PathBuf>,

    /// Destination of the generated source.
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Enclosing namespace or module name.
    #[serde(default)]
    pub namespace: Option<String>,

    /// Target language; inferred from the output extension when unset.
    #[serde(default)]
    pub target: Option<Target>,

    /// Policy for identifiers produced by more than one file.
    #[serde(default)]
    pub on_collision: Option<CollisionPolicy>,

    /// Optional JSON manifest destination.
    #[serde(default)]
    pub manifest: Option<PathBuf>,
}

/// Scanner configuration controlling file discovery.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ScannerConfig {
    /// Gitignore-style globs to leave out.
    ///
    /// # Example
    /// ```toml
    /// exclude = ["*.psd", "drafts/"]
    /// ```
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Honor `.gitignore` / `.ignore` files inside the roots.
    ///
    /// Defaults to `false`: every regular file is embedded.
    #[serde(default)]
    pub respect_gitignore: bool,
}

/// Generated source layout.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmitConfig {
    /// Bytes per line in the generated literals. Default: 16.
    #[serde(default)]
    pub bytes_per_line: Option<usize>,

    /// Whether to emit the `size` accessor. Default: `true`.
    #[serde(default)]
    pub size_accessor: Option<bool>,

    /// Name of the table variable. Default: `data`.
    #[serde(default)]
    pub table_name: Option<String>,
}

/// Report formatting preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    /// Default report format. Valid values: `table`, `json`.
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    ///
    /// Defaults to `true` when stdout is a TTY.
    #[serde(default)]
    pub color: Option<bool>,
}

impl BindataConfig {
    /// Load configuration from `.bindatarc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Load configuration from an explicitly named file.
    ///
    /// Unlike [`BindataConfig::load`], a missing or malformed file is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Get the default report format, if configured.
    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    /// Check if colored output should be used.
    ///
    /// Returns the configured value, or `None` to use auto-detection.
    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = BindataConfig::default();
        assert!(config.generator.dirs.is_empty());
        assert!(config.generator.namespace.is_none());
        assert!(!config.scanner.respect_gitignore);
        assert!(config.emit.bytes_per_line.is_none());
        assert!(config.default_format().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[generator]
dirs = ["assets", "fonts"]
output = "gen/BinaryData.h"
namespace = "BinaryData"
target = "rust"
on_collision = "first-wins"
manifest = "gen/assets.json"

[scanner]
exclude = ["*.psd", "drafts/"]
respect_gitignore = true

[emit]
bytes_per_line = 8
size_accessor = false
table_name = "resources"

[output]
format = "json"
color = false
"#;
        let config: BindataConfig = toml::from_str(toml_content).unwrap();

        assert_eq!(
            config.generator.dirs,
            vec![PathBuf::from("assets"), PathBuf::from("fonts")]
        );
        assert_eq!(
            config.generator.output,
            Some(PathBuf::from("gen/BinaryData.h"))
        );
        assert_eq!(config.generator.namespace.as_deref(), Some("BinaryData"));
        assert_eq!(config.generator.target, Some(Target::Rust));
        assert_eq!(
            config.generator.on_collision,
            Some(CollisionPolicy::FirstWins)
        );
        assert_eq!(
            config.generator.manifest,
            Some(PathBuf::from("gen/assets.json"))
        );

        assert_eq!(config.scanner.exclude, vec!["*.psd", "drafts/"]);
        assert!(config.scanner.respect_gitignore);

        assert_eq!(config.emit.bytes_per_line, Some(8));
        assert_eq!(config.emit.size_accessor, Some(false));
        assert_eq!(config.emit.table_name.as_deref(), Some("resources"));

        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_unknown_target_rejected() {
        let result: std::result::Result<BindataConfig, _> = toml::from_str(
            r#"
[generator]
target = "go"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_defaults() {
        let dir = TempDir::new().unwrap();
        let config = BindataConfig::load(dir.path());
        assert!(config.generator.dirs.is_empty());
    }

    #[test]
    fn test_load_malformed_file_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[generator\n").unwrap();

        let config = BindataConfig::load(dir.path());
        assert!(config.generator.namespace.is_none());
    }

    #[test]
    fn test_load_from_is_strict() {
        let dir = TempDir::new().unwrap();
        assert!(BindataConfig::load_from(&dir.path().join("missing.toml")).is_err());

        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[generator\n").unwrap();
        assert!(BindataConfig::load_from(&path).is_err());

        let path = dir.path().join("good.toml");
        std::fs::write(&path, "[generator]\nnamespace = \"Assets\"\n").unwrap();
        let config = BindataConfig::load_from(&path).unwrap();
        assert_eq!(config.generator.namespace.as_deref(), Some("Assets"));
    }
}
