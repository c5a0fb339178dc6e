//! Configuration file management for planner.
//!
//! Provides a TOML-based config file at `~/.config/planner/config.toml` and a
//! resolution chain: CLI flag > env var > config file > default.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use planner_core::gemini::GeminiConfig;
use planner_core::plan::{DEFAULT_TEMPLATE, PromptTemplate};
use planner_db::config::DbConfig;

// -----------------------------------------------------------------------
// Config file types
// -----------------------------------------------------------------------

#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigFile {
    pub database: DatabaseSection,
    pub gemini: GeminiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DatabaseSection {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiSection {
    /// API key sent as the `key` query parameter.
    pub api_key: String,
    /// Endpoint URL override. Defaults to the public generateContent URL.
    pub api_url: Option<String>,
    /// Prompt template override. Must contain a `{goal}` placeholder.
    pub prompt_template: Option<String>,
}

// -----------------------------------------------------------------------
// Paths
// -----------------------------------------------------------------------

/// Return the planner config directory.
///
/// Always uses XDG layout: `$XDG_CONFIG_HOME/planner` or `~/.config/planner`.
/// We intentionally ignore the platform-specific `dirs::config_dir()`
/// (which returns `~/Library/Application Support` on macOS).
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg).join("planner");
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("planner")
}

/// Return the path to the planner config file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

// -----------------------------------------------------------------------
// Read / write
// -----------------------------------------------------------------------

/// Load and parse the config file. Returns an error if it does not exist.
pub fn load_config() -> Result<ConfigFile> {
    let path = config_path();
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&contents).context("failed to parse config file")?;
    Ok(config)
}

/// Serialize and write the config file, creating parent dirs as needed.
/// Sets file permissions to 0600 on Unix (the file holds the API key).
pub fn save_config(config: &ConfigFile) -> Result<()> {
    let path = config_path();
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create config directory {}", dir.display()))?;

    let contents = toml::to_string_pretty(config).context("failed to serialize config")?;
    std::fs::write(&path, &contents)
        .with_context(|| format!("failed to write config file at {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(&path, perms)
            .with_context(|| format!("failed to set permissions on {}", path.display()))?;
    }

    Ok(())
}

// -----------------------------------------------------------------------
// Resolved config
// -----------------------------------------------------------------------

/// Resolve the database URL using the chain:
/// CLI flag > `PLANNER_DATABASE_URL` env > config file > default.
///
/// Commands that only touch the database use this directly so they do not
/// require a Gemini API key.
pub fn resolve_db_config(cli_db_url: Option<&str>) -> DbConfig {
    if let Some(url) = cli_db_url {
        return DbConfig::new(url);
    }
    if let Ok(url) = std::env::var("PLANNER_DATABASE_URL") {
        return DbConfig::new(url);
    }
    if let Ok(cfg) = load_config() {
        return DbConfig::new(cfg.database.url);
    }
    DbConfig::new(DbConfig::DEFAULT_URL)
}

/// Fully resolved configuration, ready for use.
#[derive(Debug)]
pub struct PlannerConfig {
    pub db_config: DbConfig,
    pub gemini: GeminiConfig,
    pub template: PromptTemplate,
}

impl PlannerConfig {
    /// Resolve configuration using the chain: CLI flag > env var > config
    /// file > default.
    ///
    /// - DB URL: `cli_db_url` > `PLANNER_DATABASE_URL` > `config.database.url` > `DbConfig::DEFAULT_URL`
    /// - API key: `GEMINI_API_KEY` > `config.gemini.api_key` > error
    /// - API URL: `GEMINI_API_URL` > `config.gemini.api_url` > `GeminiConfig::DEFAULT_URL`
    /// - Prompt template: `PLANNER_PROMPT_TEMPLATE` > `config.gemini.prompt_template` > built-in default
    pub fn resolve(cli_db_url: Option<&str>) -> Result<Self> {
        let file_config = load_config().ok();

        // DB URL resolution.
        let db_url = if let Some(url) = cli_db_url {
            url.to_string()
        } else if let Ok(url) = std::env::var("PLANNER_DATABASE_URL") {
            url
        } else if let Some(ref cfg) = file_config {
            cfg.database.url.clone()
        } else {
            DbConfig::DEFAULT_URL.to_string()
        };
        let db_config = DbConfig::new(db_url);

        // API key resolution.
        let api_key = if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            key
        } else if let Some(ref cfg) = file_config {
            cfg.gemini.api_key.clone()
        } else {
            bail!(
                "gemini API key not found; set GEMINI_API_KEY or run `planner init` to create a config file"
            );
        };

        // API URL resolution.
        let api_url = if let Ok(url) = std::env::var("GEMINI_API_URL") {
            url
        } else if let Some(url) = file_config
            .as_ref()
            .and_then(|cfg| cfg.gemini.api_url.clone())
        {
            url
        } else {
            GeminiConfig::DEFAULT_URL.to_string()
        };

        // Prompt template resolution.
        let template = if let Ok(template) = std::env::var("PLANNER_PROMPT_TEMPLATE") {
            template
        } else if let Some(template) = file_config
            .as_ref()
            .and_then(|cfg| cfg.gemini.prompt_template.clone())
        {
            template
        } else {
            DEFAULT_TEMPLATE.to_string()
        };

        Ok(Self {
            db_config,
            gemini: GeminiConfig::new(api_key, api_url),
            template: PromptTemplate::new(template),
        })
    }
}

// -----------------------------------------------------------------------
// Tests
// -----------------------------------------------------------------------
