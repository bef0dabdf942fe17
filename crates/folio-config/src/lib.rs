//! Configuration management for folio.
//!
//! Parses `folio.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `site.title`
//! - `site.base_url`
//! - `versions.current`

mod expand;

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override docs source directory.
    pub source_dir: Option<PathBuf>,
    /// Override build output directory.
    pub out_dir: Option<PathBuf>,
    /// Override canonical base URL.
    pub base_url: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Application configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and SEO defaults.
    pub site: SiteConfig,
    /// Documentation sources (paths are relative strings from TOML).
    docs: DocsConfigRaw,
    /// Build output (paths are relative strings from TOML).
    build: BuildConfigRaw,
    /// Version selector defaults.
    pub versions: VersionsConfig,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved build configuration (set after loading).
    #[serde(skip)]
    pub build_resolved: BuildConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Site identity and SEO defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site title, appended to page titles.
    pub title: String,
    /// Brand name; page titles already containing it are left unsuffixed.
    pub name: String,
    /// Default meta description.
    pub description: String,
    /// Default meta keywords.
    pub keywords: Vec<String>,
    /// Author meta tag.
    pub author: String,
    /// Public base URL for canonical links.
    pub base_url: Option<String>,
    /// Social preview image.
    pub og_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Einstein Labs Documentation".to_owned(),
            name: "Einstein Labs".to_owned(),
            description: "Comprehensive technical documentation for Einstein Labs projects. APIs, guides, and developer tools.".to_owned(),
            keywords: ["documentation", "api", "developer", "einstein labs", "technical docs"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            author: "Einstein Labs".to_owned(),
            base_url: None,
            og_image: "/og-image.png".to_owned(),
        }
    }
}

/// Version selector defaults.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VersionsConfig {
    /// Initially selected version id.
    pub current: String,
}

impl Default for VersionsConfig {
    fn default() -> Self {
        Self {
            current: "v2.1.0".to_owned(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    source_dir: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
struct BuildConfigRaw {
    out_dir: Option<String>,
}

/// Resolved documentation configuration with absolute paths.
#[derive(Clone, Debug, Default)]
pub struct DocsConfig {
    /// Directory with additional markdown pages.
    pub source_dir: PathBuf,
}

/// Resolved build configuration with absolute paths.
#[derive(Clone, Debug, Default)]
pub struct BuildConfig {
    /// Static site output directory.
    pub out_dir: PathBuf,
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
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`site.base_url`").
        field: String,
        /// Error message (e.g., "${`FOLIO_BASE_URL`} not set").
        message: String,
    },
}

fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `folio.toml` in the current directory and its parents, falling back
    /// to defaults relative to the current directory.
    ///
    /// CLI settings are applied after loading and take precedence.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the resulting configuration is invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source_dir) = &settings.source_dir {
            self.docs_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(out_dir) = &settings.out_dir {
            self.build_resolved.out_dir.clone_from(out_dir);
        }
        if let Some(base_url) = &settings.base_url {
            self.site.base_url = Some(base_url.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let current = std::env::current_dir().ok()?;
        Self::discover_from(&current)
    }

    fn discover_from(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            docs: DocsConfigRaw::default(),
            build: BuildConfigRaw::default(),
            versions: VersionsConfig::default(),
            docs_resolved: DocsConfig {
                source_dir: base.join("docs"),
            },
            build_resolved: BuildConfig {
                out_dir: base.join("site"),
            },
            config_path: None,
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.site.title, "site.title")?;
        if let Some(base_url) = &self.site.base_url {
            require_http_url(base_url, "site.base_url")?;
        }
        require_non_empty(&self.versions.current, "versions.current")?;
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.site.title = expand::expand_env(&self.site.title, "site.title")?;
        if let Some(ref url) = self.site.base_url {
            self.site.base_url = Some(expand::expand_env(url, "site.base_url")?);
        }
        self.versions.current = expand::expand_env(&self.versions.current, "versions.current")?;
        Ok(())
    }

    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.docs_resolved = DocsConfig {
            source_dir: resolve(self.docs.source_dir.as_deref(), "docs"),
        };
        self.build_resolved = BuildConfig {
            out_dir: resolve(self.build.out_dir.as_deref(), "site"),
        };
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/test"));
        assert_eq!(config.site.title, "Einstein Labs Documentation");
        assert_eq!(config.site.og_image, "/og-image.png");
        assert_eq!(config.site.keywords.len(), 5);
        assert_eq!(config.versions.current, "v2.1.0");
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
        assert_eq!(config.build_resolved.out_dir, PathBuf::from("/test/site"));
        assert!(config.site.base_url.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.site.author, "Einstein Labs");
        assert_eq!(config.versions.current, "v2.1.0");
    }

    #[test]
    fn test_parse_site_config() {
        let toml = r#"
[site]
title = "Acme Docs"
name = "Acme"
keywords = ["acme"]
base_url = "https://docs.acme.dev"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.site.title, "Acme Docs");
        assert_eq!(config.site.name, "Acme");
        assert_eq!(config.site.keywords, vec!["acme".to_owned()]);
        assert_eq!(config.site.base_url.as_deref(), Some("https://docs.acme.dev"));
        // Unset fields keep their defaults
        assert_eq!(config.site.og_image, "/og-image.png");
    }

    #[test]
    fn test_resolve_paths() {
        let toml = r#"
[docs]
source_dir = "content"

[build]
out_dir = "public"
"#;
        let mut config: Config = toml::from_str(toml).unwrap();
        config.resolve_paths(Path::new("/project"));

        assert_eq!(
            config.docs_resolved.source_dir,
            PathBuf::from("/project/content")
        );
        assert_eq!(config.build_resolved.out_dir, PathBuf::from("/project/public"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.base_url = Some("docs.example.com".to_owned());

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("site.base_url"));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.site.title = "  ".to_owned();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_version() {
        let mut config = Config::default_with_base(Path::new("/test"));
        config.versions.current = String::new();
        assert!(config.validate().unwrap_err().to_string().contains("versions.current"));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/test"));
        let overrides = CliSettings {
            out_dir: Some(PathBuf::from("/tmp/out")),
            base_url: Some("https://example.org".to_owned()),
            ..Default::default()
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.build_resolved.out_dir, PathBuf::from("/tmp/out"));
        assert_eq!(config.site.base_url.as_deref(), Some("https://example.org"));
        // Unchanged
        assert_eq!(config.docs_resolved.source_dir, PathBuf::from("/test/docs"));
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let err = Config::load(Some(Path::new("/nonexistent/folio.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_load_from_file_resolves_relative_to_config_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "[docs]\nsource_dir = \"pages\"\n\n[versions]\ncurrent = \"v2.0.0\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.docs_resolved.source_dir, temp_dir.path().join("pages"));
        assert_eq!(config.build_resolved.out_dir, temp_dir.path().join("site"));
        assert_eq!(config.versions.current, "v2.0.0");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: the variable name is unique to this test
        unsafe {
            std::env::remove_var("FOLIO_TEST_LOAD_BASE_URL");
        }
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "[site]\nbase_url = \"${FOLIO_TEST_LOAD_BASE_URL:-https://docs.example.com}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();
        assert_eq!(
            config.site.base_url.as_deref(),
            Some("https://docs.example.com")
        );
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "[site\ntitle = ").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_cli_base_url_is_validated() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("folio.toml");
        std::fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            base_url: Some("ftp://example.org".to_owned()),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_discover_from_parent_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join("folio.toml"), "").unwrap();

        let found = Config::discover_from(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join("folio.toml"));
    }
}
