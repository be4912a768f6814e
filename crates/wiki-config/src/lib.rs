//! Site configuration for the wiki theme.
//!
//! Parses `wiki.toml` configuration files with serde. Every field has a
//! default, so an empty file (or no file at all) yields a usable
//! configuration.
//!
//! # Example
//!
//! ```
//! use wiki_config::SiteConfig;
//!
//! let config: SiteConfig = toml::from_str(r#"
//!     name = "Mi Wiki"
//!     base_url = "https://wiki.example.com"
//! "#).unwrap();
//! assert_eq!(config.name, "Mi Wiki");
//! assert_eq!(config.nav_location, "main_nav");
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "wiki.toml";

/// Default cap on the homepage topic query.
const DEFAULT_TOPICS_LIMIT: usize = 200;

/// Site configuration.
///
/// Identity and rendering knobs for the page shell: site name, base URL
/// for link resolution, document language/charset, the navigation menu
/// location, and the topic query limit.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, shown in the header logo and footer copyright.
    pub name: String,
    /// Site tagline/description.
    pub tagline: String,
    /// Base URL used to resolve the home link and footer paths.
    pub base_url: String,
    /// Document language attribute (`<html lang>`).
    pub language: String,
    /// Document character set.
    pub charset: String,
    /// Named menu location resolved by the navigation provider.
    pub nav_location: String,
    /// Maximum number of topics fetched for the homepage grid.
    pub topics_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            tagline: String::new(),
            base_url: "/".to_owned(),
            language: "es".to_owned(),
            charset: "UTF-8".to_owned(),
            nav_location: "main_nav".to_owned(),
            topics_limit: DEFAULT_TOPICS_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the path does not exist,
    /// `ConfigError::Io`/`ConfigError::Parse` on read or parse failure,
    /// and `ConfigError::Validation` if the loaded values are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `wiki.toml` in the given directory,
    /// falling back to defaults when the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error only for a file that exists but cannot be
    /// loaded; a missing file is not an error.
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILENAME);
        if path.exists() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if `base_url` is neither an
    /// HTTP(S) URL nor a root-relative path, or if `topics_limit` is 0.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
            && !self.base_url.starts_with('/')
        {
            return Err(ConfigError::Validation(format!(
                "base_url must be an http(s) URL or root-relative path, got: {}",
                self.base_url
            )));
        }
        if self.topics_limit == 0 {
            return Err(ConfigError::Validation(
                "topics_limit must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }

    /// Resolve a root-relative path against the base URL.
    ///
    /// `"/"` resolves to the base URL itself; other paths are appended
    /// without doubling the separator.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path == "/" || path.is_empty() {
            if base.is_empty() {
                "/".to_owned()
            } else {
                base.to_owned()
            }
        } else {
            format!("{base}{path}")
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.base_url, "/");
        assert_eq!(config.language, "es");
        assert_eq!(config.charset, "UTF-8");
        assert_eq!(config.nav_location, "main_nav");
        assert_eq!(config.topics_limit, 200);
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: SiteConfig = toml::from_str(
            r#"
            name = "Wiki de Pruebas"
            base_url = "https://wiki.example.com"
            topics_limit = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.name, "Wiki de Pruebas");
        assert_eq!(config.base_url, "https://wiki.example.com");
        assert_eq!(config.topics_limit, 12);
        // Unset fields keep their defaults.
        assert_eq!(config.nav_location, "main_nav");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "name = \"Archivo\"").unwrap();
        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.name, "Archivo");
    }

    #[test]
    fn test_load_missing_file() {
        let err = SiteConfig::load(Path::new("/nonexistent/wiki.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::discover(dir.path()).unwrap();
        assert_eq!(config.base_url, "/");
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let config = SiteConfig {
            base_url: "ftp://example.com".to_owned(),
            ..SiteConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_zero_limit() {
        let config = SiteConfig {
            topics_limit: 0,
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_url_for() {
        let config = SiteConfig {
            base_url: "https://wiki.example.com/".to_owned(),
            ..SiteConfig::default()
        };
        assert_eq!(config.url_for("/"), "https://wiki.example.com");
        assert_eq!(
            config.url_for("/acerca-de"),
            "https://wiki.example.com/acerca-de"
        );
    }

    #[test]
    fn test_url_for_root_relative_base() {
        let config = SiteConfig::default();
        assert_eq!(config.url_for("/"), "/");
        assert_eq!(config.url_for("/contacto"), "/contacto");
    }
}
