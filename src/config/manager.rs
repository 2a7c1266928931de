use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;
use crate::translation::{DEFAULT_TARGET_LANG, DeeplClient, validate_target};

/// Built-in default for the source article directory.
pub const DEFAULT_INPUT_DIR: &str = "articles";

/// Built-in default for the translated article directory.
pub const DEFAULT_OUTPUT_DIR: &str = "translate";

/// Default settings in the `[artl]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArtlConfig {
    /// Default source directory.
    pub input: Option<String>,
    /// Default destination directory.
    pub output: Option<String>,
    /// Default target language (DeepL code).
    pub to: Option<String>,
}

/// DeepL provider settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeeplConfig {
    /// API endpoint override. Defaults by key flavor when unset.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl DeeplConfig {
    /// Environment variable consulted when `api_key_env` is unset.
    pub const DEFAULT_API_KEY_ENV: &'static str = "DEEPL_API_KEY";

    /// Gets the API key, preferring the environment over the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        let env_var = self
            .api_key_env
            .as_deref()
            .unwrap_or(Self::DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// dev.to publishing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevtoConfig {
    /// Base URL of the dev.to instance.
    pub base_url: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl DevtoConfig {
    /// Environment variable consulted when `api_key_env` is unset.
    pub const DEFAULT_API_KEY_ENV: &'static str = "DEV_TO_GIT_TOKEN";

    /// Default base URL for the dev.to API.
    pub const DEFAULT_BASE_URL: &'static str = "https://dev.to";

    /// Gets the API key, preferring the environment over the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        let env_var = self
            .api_key_env
            .as_deref()
            .unwrap_or(Self::DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/artl/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub artl: ArtlConfig,
    /// DeepL provider settings.
    #[serde(default)]
    pub deepl: DeeplConfig,
    /// dev.to publishing settings.
    #[serde(default)]
    pub devto: DevtoConfig,
}

/// Options for resolving configuration.
///
/// Contains CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Source directory override.
    pub input: Option<String>,
    /// Destination directory override.
    pub output: Option<String>,
    /// Target language override.
    pub to: Option<String>,
    /// DeepL endpoint override.
    pub endpoint: Option<String>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory scanned for source articles.
    pub input_dir: PathBuf,
    /// Directory translated articles are written to.
    pub output_dir: PathBuf,
    /// Canonical DeepL target language code.
    pub target_lang: String,
    /// DeepL API endpoint.
    pub endpoint: String,
    /// DeepL API key, if configured.
    pub api_key: Option<String>,
}

/// Resolved dev.to publishing configuration.
#[derive(Debug, Clone)]
pub struct ResolvedDevto {
    /// Base URL of the dev.to API.
    pub base_url: String,
    /// dev.to API key.
    pub api_key: String,
}

/// Resolves the pipeline configuration by merging CLI options with config
/// file settings.
///
/// CLI options take precedence over config file values, which take
/// precedence over built-in defaults (`articles`, `translate`, `EN-US`).
///
/// # Errors
///
/// Returns an error if the resolved target language is not a DeepL target
/// code. A missing API key is not an error here; translation calls report
/// it per file.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let input = options
        .input
        .as_ref()
        .or(config_file.artl.input.as_ref())
        .map_or(DEFAULT_INPUT_DIR, String::as_str);

    let output = options
        .output
        .as_ref()
        .or(config_file.artl.output.as_ref())
        .map_or(DEFAULT_OUTPUT_DIR, String::as_str);

    let target_lang = validate_target(
        options
            .to
            .as_ref()
            .or(config_file.artl.to.as_ref())
            .map_or(DEFAULT_TARGET_LANG, String::as_str),
    )?;

    let api_key = config_file.deepl.resolve_api_key();

    let endpoint = options
        .endpoint
        .as_ref()
        .or(config_file.deepl.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DeeplClient::endpoint_for_key(api_key.as_deref()).to_string());

    Ok(ResolvedConfig {
        input_dir: PathBuf::from(input),
        output_dir: PathBuf::from(output),
        target_lang,
        endpoint,
        api_key,
    })
}

/// Resolves the dev.to publishing configuration.
///
/// # Errors
///
/// Returns an error if no API key is configured: publishing cannot degrade
/// per file the way translation does, every request would be rejected.
pub fn resolve_devto(config_file: &ConfigFile) -> Result<ResolvedDevto> {
    let base_url = config_file
        .devto
        .base_url
        .clone()
        .unwrap_or_else(|| DevtoConfig::DEFAULT_BASE_URL.to_string());

    let Some(api_key) = config_file.devto.resolve_api_key() else {
        let env_var = config_file
            .devto
            .api_key_env
            .as_deref()
            .unwrap_or(DevtoConfig::DEFAULT_API_KEY_ENV);
        bail!(
            "Publishing to dev.to requires an API key\n\n\
             Set the {env_var} environment variable:\n  \
             export {env_var}=\"your-api-key\"\n\n\
             Or set api_key in ~/.config/artl/config.toml"
        );
    };

    Ok(ResolvedDevto { base_url, api_key })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/artl/config.toml`
    /// or `~/.config/artl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        fs::write(&self.config_path, contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    pub fn load_or_default(&self) -> ConfigFile {
        self.load().unwrap_or_default()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("config.toml"),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            artl: ArtlConfig {
                input: Some("posts".to_string()),
                output: Some("out".to_string()),
                to: Some("EN-GB".to_string()),
            },
            deepl: DeeplConfig {
                endpoint: Some("https://api-free.deepl.com".to_string()),
                api_key: None,
                api_key_env: Some("MY_DEEPL_KEY".to_string()),
            },
            devto: DevtoConfig::default(),
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.artl.input, Some("posts".to_string()));
        assert_eq!(loaded.artl.output, Some("out".to_string()));
        assert_eq!(loaded.artl.to, Some("EN-GB".to_string()));
        assert_eq!(
            loaded.deepl.endpoint,
            Some("https://api-free.deepl.com".to_string())
        );
        assert_eq!(loaded.deepl.api_key_env, Some("MY_DEEPL_KEY".to_string()));
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let result = manager.load();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_deepl_api_key_from_env() {
        // SAFETY: This test runs serially and only modifies a test-specific env var
        unsafe {
            std::env::set_var("ARTL_TEST_DEEPL_KEY", "env-key-value");
        }

        let config = DeeplConfig {
            endpoint: None,
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("ARTL_TEST_DEEPL_KEY".to_string()),
        };

        // Environment variable takes priority
        assert_eq!(config.resolve_api_key(), Some("env-key-value".to_string()));

        // SAFETY: Cleanup test env var
        unsafe {
            std::env::remove_var("ARTL_TEST_DEEPL_KEY");
        }
    }

    #[test]
    #[serial]
    fn test_deepl_api_key_fallback_to_file() {
        unsafe {
            std::env::remove_var("ARTL_TEST_NONEXISTENT_KEY");
        }

        let config = DeeplConfig {
            endpoint: None,
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("ARTL_TEST_NONEXISTENT_KEY".to_string()),
        };

        assert_eq!(config.resolve_api_key(), Some("fallback-key".to_string()));
    }

    // resolve_config tests

    fn create_test_options() -> ResolveOptions {
        ResolveOptions {
            input: Some("posts".to_string()),
            output: Some("translated".to_string()),
            to: Some("EN-GB".to_string()),
            endpoint: Some("http://localhost:9000".to_string()),
        }
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            artl: ArtlConfig {
                input: Some("file-input".to_string()),
                output: Some("file-output".to_string()),
                to: Some("EN-US".to_string()),
            },
            deepl: DeeplConfig {
                endpoint: Some("http://file-endpoint:9000".to_string()),
                api_key: Some("file-key".to_string()),
                api_key_env: Some("ARTL_TEST_UNSET_ENV".to_string()),
            },
            devto: DevtoConfig::default(),
        }
    }

    #[test]
    #[serial]
    fn test_resolve_config_cli_overrides_file() {
        let options = create_test_options();
        let config = create_test_config();

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.input_dir, PathBuf::from("posts"));
        assert_eq!(resolved.output_dir, PathBuf::from("translated"));
        assert_eq!(resolved.target_lang, "EN-GB");
        assert_eq!(resolved.endpoint, "http://localhost:9000");
        assert_eq!(resolved.api_key, Some("file-key".to_string()));
    }

    #[test]
    #[serial]
    fn test_resolve_config_falls_back_to_file() {
        let options = ResolveOptions::default();
        let config = create_test_config();

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.input_dir, PathBuf::from("file-input"));
        assert_eq!(resolved.output_dir, PathBuf::from("file-output"));
        assert_eq!(resolved.target_lang, "EN-US");
        assert_eq!(resolved.endpoint, "http://file-endpoint:9000");
    }

    #[test]
    #[serial]
    fn test_resolve_config_built_in_defaults() {
        unsafe {
            std::env::remove_var(DeeplConfig::DEFAULT_API_KEY_ENV);
        }

        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.input_dir, PathBuf::from(DEFAULT_INPUT_DIR));
        assert_eq!(resolved.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(resolved.target_lang, DEFAULT_TARGET_LANG);
        assert_eq!(resolved.endpoint, "https://api.deepl.com");
        assert_eq!(resolved.api_key, None);
    }

    #[test]
    #[serial]
    fn test_resolve_config_endpoint_follows_free_key() {
        unsafe {
            std::env::set_var(DeeplConfig::DEFAULT_API_KEY_ENV, "some-key:fx");
        }

        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.endpoint, "https://api-free.deepl.com");
        assert_eq!(resolved.api_key, Some("some-key:fx".to_string()));

        unsafe {
            std::env::remove_var(DeeplConfig::DEFAULT_API_KEY_ENV);
        }
    }

    #[test]
    fn test_resolve_config_rejects_bad_target() {
        let options = ResolveOptions {
            to: Some("klingon".to_string()),
            ..ResolveOptions::default()
        };

        let result = resolve_config(&options, &ConfigFile::default());

        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Invalid target language")
        );
    }

    // resolve_devto tests

    #[test]
    #[serial]
    fn test_resolve_devto_requires_api_key() {
        unsafe {
            std::env::remove_var(DevtoConfig::DEFAULT_API_KEY_ENV);
        }

        let result = resolve_devto(&ConfigFile::default());

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("API key"));
    }

    #[test]
    #[serial]
    fn test_resolve_devto_defaults() {
        unsafe {
            std::env::set_var(DevtoConfig::DEFAULT_API_KEY_ENV, "devto-token");
        }

        let resolved = resolve_devto(&ConfigFile::default()).unwrap();

        assert_eq!(resolved.base_url, DevtoConfig::DEFAULT_BASE_URL);
        assert_eq!(resolved.api_key, "devto-token");

        unsafe {
            std::env::remove_var(DevtoConfig::DEFAULT_API_KEY_ENV);
        }
    }
}
