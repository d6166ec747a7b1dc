//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default CDN root for the stylesheet and script bundles
pub const DEFAULT_CDN_BASE: &str =
    "https://cdn.jsdelivr.net/gh/avionics18/md-to-html-automation@v1.0.1";

pub const DEFAULT_INPUT_DIR: &str = ".";
pub const DEFAULT_ASSETS_DIR: &str = "./BASE/assets";
pub const DEFAULT_SUPER_HEADING: &str = "Notes";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Directory '{}' does not exist", .0.display())]
    MissingInputDir(PathBuf),

    #[error("Local assets directory '{}' not found or is not a directory", .0.display())]
    MissingAssetsDir(PathBuf),
}

/// Optional settings read from `mdpages.yml`
///
/// Every field may be omitted; missing values are filled in from the command
/// line, an interactive prompt, or the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub use_cdn: Option<bool>,

    #[serde(default)]
    pub assets: Option<PathBuf>,

    #[serde(default)]
    pub super_heading: Option<String>,

    #[serde(default = "default_cdn_base")]
    pub cdn_base: String,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

fn default_cdn_base() -> String {
    DEFAULT_CDN_BASE.to_string()
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from YAML text; an empty document is valid.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self {
                cdn_base: default_cdn_base(),
                ..Self::default()
            });
        }
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Load `path` when it exists; a missing file yields an empty config
    /// unless `required` is set.
    pub fn load_optional(path: &Path, required: bool) -> Result<Self, ConfigError> {
        if path.exists() || required {
            tracing::debug!("Loading config from {:?}", path);
            Self::from_file(path)
        } else {
            tracing::debug!("No config file at {:?}; using defaults", path);
            Self::from_yaml("")
        }
    }

    /// Input directory, resolved relative to the config file
    pub fn input_dir(&self) -> Option<PathBuf> {
        self.input.as_ref().map(|p| self.resolve_path(p))
    }

    /// Output directory, resolved relative to the config file
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output.as_ref().map(|p| self.resolve_path(p))
    }

    /// Local assets directory, resolved relative to the config file
    pub fn assets_dir(&self) -> Option<PathBuf> {
        self.assets.as_ref().map(|p| self.resolve_path(p))
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }
}

/// Where page stylesheets and scripts come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Link the published bundles under this CDN root
    Cdn { base: String },
    /// Copy `css/` and `js/` from a local directory
    Local(PathBuf),
    /// Extract the bundle compiled into the binary
    Bundled,
}

/// Fully resolved build settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub assets: AssetSource,
    pub super_heading: String,
}

impl Settings {
    /// Check the directories a build depends on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.input_dir.is_dir() {
            return Err(ConfigError::MissingInputDir(self.input_dir.clone()));
        }
        if let AssetSource::Local(dir) = &self.assets {
            if !dir.is_dir() {
                return Err(ConfigError::MissingAssetsDir(dir.clone()));
            }
        }
        Ok(())
    }

    /// Whether images need copying next to the generated pages
    ///
    /// Compares resolved paths, so `./notes` and `notes` are the same place.
    pub fn writes_elsewhere(&self) -> bool {
        !is_same_dir(&self.input_dir, &self.output_dir)
    }
}

/// Whether two paths name the same directory once symlinks and `..` are
/// resolved. Paths that cannot be resolved are compared as written.
pub fn is_same_dir(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Interpret a yes/no answer; anything other than `yes`/`y` is a no.
pub fn parse_yes_no(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "yes" | "y")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.cdn_base, DEFAULT_CDN_BASE);
        assert!(config.input.is_none());
        assert!(config.use_cdn.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let config = Config::from_yaml(
            r#"
input: notes
output: site
use_cdn: false
assets: theme/assets
super_heading: "Field Notes"
"#,
        )
        .unwrap();

        assert_eq!(config.input_dir(), Some(PathBuf::from("notes")));
        assert_eq!(config.output_dir(), Some(PathBuf::from("site")));
        assert_eq!(config.use_cdn, Some(false));
        assert_eq!(config.assets_dir(), Some(PathBuf::from("theme/assets")));
        assert_eq!(config.super_heading.as_deref(), Some("Field Notes"));
        assert_eq!(config.cdn_base, DEFAULT_CDN_BASE);
    }

    #[test]
    fn test_paths_resolve_relative_to_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("mdpages.yml");
        fs::write(&path, "input: notes\noutput: /abs/out\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.input_dir(), Some(dir.path().join("notes")));
        assert_eq!(config.output_dir(), Some(PathBuf::from("/abs/out")));
    }

    #[test]
    fn test_missing_optional_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.yml");
        assert!(Config::load_optional(&path, false).is_ok());
        assert!(matches!(
            Config::load_optional(&path, true),
            Err(ConfigError::ReadError(_))
        ));
    }

    #[test]
    fn test_invalid_yaml() {
        assert!(matches!(
            Config::from_yaml("use_cdn: [not, a, bool]"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_validate_directories() {
        let dir = tempdir().unwrap();
        let mut settings = Settings {
            input_dir: dir.path().to_path_buf(),
            output_dir: dir.path().to_path_buf(),
            assets: AssetSource::Cdn {
                base: DEFAULT_CDN_BASE.to_string(),
            },
            super_heading: DEFAULT_SUPER_HEADING.to_string(),
        };
        assert!(settings.validate().is_ok());
        assert!(!settings.writes_elsewhere());

        settings.assets = AssetSource::Local(dir.path().join("missing"));
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MissingAssetsDir(_))
        ));

        settings.input_dir = dir.path().join("nope");
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::MissingInputDir(_))
        ));
    }

    #[test]
    fn test_same_dir_spelled_differently() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("notes")).unwrap();
        fs::create_dir_all(dir.path().join("site")).unwrap();

        let settings = Settings {
            input_dir: dir.path().join("notes"),
            output_dir: dir.path().join("site/../notes"),
            assets: AssetSource::Bundled,
            super_heading: DEFAULT_SUPER_HEADING.to_string(),
        };
        assert!(!settings.writes_elsewhere());

        let elsewhere = Settings {
            output_dir: dir.path().join("site"),
            ..settings
        };
        assert!(elsewhere.writes_elsewhere());
        assert!(!is_same_dir(&dir.path().join("a"), &dir.path().join("b")));
    }

    #[test]
    fn test_parse_yes_no() {
        assert!(parse_yes_no("yes"));
        assert!(parse_yes_no(" Y "));
        assert!(parse_yes_no("YES"));
        assert!(!parse_yes_no("no"));
        assert!(!parse_yes_no("true"));
        assert!(!parse_yes_no(""));
    }
}
