//! Folio configuration.
//!
//! A single immutable [`FolioConfig`] is built at startup (from TOML, or the
//! built-in defaults) and handed to every component that needs it. Nothing
//! mutates it afterwards.
//!
//! Resolution order for the config file:
//! 1. An explicit path (`--config`)
//! 2. The `FOLIO_CONFIG` environment variable
//! 3. `<platform config dir>/folio/config.toml`
//!
//! A missing file is not an error; defaults are used instead. After the
//! file, `FOLIO_*` variables (as printed by `folio config export`) override
//! individual fields.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Project name used for the config directory and env var prefix.
pub const PROJECT_NAME: &str = "folio";

/// Environment variable pointing at a config file.
pub const CONFIG_ENV_VAR: &str = "FOLIO_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Owner identifier every remote URL is derived from
    pub owner: String,
    /// Name shown in the profile heading
    pub display_name: String,
    /// Short text below the name
    pub bio: String,
    /// Canonical URL of the page (used for `og:url`)
    pub site_url: String,
    /// IANA timezone the clock displays
    pub timezone: String,
    /// Tooltip shown on the clock
    pub clock_label: String,
    /// Contact methods
    pub contacts: ContactsConfig,
    /// Document metadata
    pub page: PageConfig,
    /// Remote hosts
    pub hosts: HostsConfig,
    /// Project feed fetching policy
    pub feed: FeedConfig,
    /// HTTP server
    pub server: ServerConfig,
}

/// Contact methods. One field per [`ContactKind`](crate::ContactKind), so a
/// missing kind can only ever be a config parse problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactsConfig {
    /// Public identity handle
    pub identity: String,
    /// Email address
    pub email: String,
}

/// Static document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// `<title>` and `og:title`
    pub title: String,
    /// `description` and `og:description`
    pub description: String,
    /// `keywords` meta tag
    pub keywords: Vec<String>,
}

/// Base URLs of the remote services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostsConfig {
    /// Host serving raw repository files (feed, banner, favicon)
    pub raw: String,
    /// Host serving the owner's public profile and avatar
    pub profile: String,
    /// Contributions API used by the activity calendar
    pub activity_api: String,
}

/// Fetch policy for remote sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
    /// Retries after the first attempt, for retryable errors only
    pub max_retries: usize,
    /// First backoff delay in milliseconds
    pub retry_min_delay_ms: u64,
    /// Re-fetch period in seconds; `0` fetches once at startup
    pub refresh_interval_secs: u64,
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            owner: "MathiasDPX".to_string(),
            display_name: "Mathias DPX".to_string(),
            bio: String::new(),
            site_url: "https://www.mathiasd.fr/".to_string(),
            timezone: "Europe/Paris".to_string(),
            clock_label: "Current time in France".to_string(),
            contacts: ContactsConfig::default(),
            page: PageConfig::default(),
            hosts: HostsConfig::default(),
            feed: FeedConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl Default for ContactsConfig {
    fn default() -> Self {
        Self {
            identity: "MathiasDPX".to_string(),
            email: "mathias@mathiasd.fr".to_string(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Mathias's Portfolio".to_string(),
            description: "Projects, activity and contact details of Mathias DPX".to_string(),
            keywords: Vec::new(),
        }
    }
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            raw: "https://raw.githubusercontent.com".to_string(),
            profile: "https://github.com".to_string(),
            activity_api: "https://github-contributions-api.jogruber.de/v4".to_string(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            max_retries: 2,
            retry_min_delay_ms: 500,
            refresh_interval_secs: 0,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl FolioConfig {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// An explicitly given path that does not exist is an error; a missing
    /// default path is not.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = Self::load_file(config_path)?;
        let vars = std::env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
        config.apply_env_overrides(vars)?;
        Ok(config)
    }

    fn load_file(config_path: Option<&str>) -> Result<Self> {
        let explicit = config_path.is_some() || std::env::var_os(CONFIG_ENV_VAR).is_some();
        let Some(path) = Self::resolve_config_path(config_path) else {
            tracing::debug!("no config directory on this platform, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            if explicit {
                return Err(Error::config(format!(
                    "Config file does not exist at {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let config = Self::from_file(&path)?;
        tracing::info!(path = %path.display(), owner = %config.owner, "loaded config");
        Ok(config)
    }

    /// Override fields from `FOLIO_*` variables, using the names printed by
    /// [`FolioConfig::to_env_vars`].
    ///
    /// Values are parsed according to the type of the field they replace;
    /// arrays are comma-separated. Unknown names and `FOLIO_CONFIG` are
    /// ignored. The result is validated.
    pub fn apply_env_overrides<I>(&mut self, vars: I) -> Result<()>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut tree = toml::Value::try_from(&*self)?;
        let mut fields = Vec::new();
        collect_env_fields(&tree, &PROJECT_NAME.to_uppercase(), &mut Vec::new(), &mut fields);

        let mut applied = 0usize;
        for (name, raw) in vars {
            if name == CONFIG_ENV_VAR {
                continue;
            }
            let Some((_, keys)) = fields.iter().find(|(env, _)| *env == name) else {
                continue;
            };
            let slot = keys
                .iter()
                .try_fold(&mut tree, |node, key| node.as_table_mut()?.get_mut(key))
                .ok_or_else(|| Error::config(format!("{name} does not map to a field")))?;
            *slot = parse_env_value(slot, &name, &raw)?;
            tracing::debug!(var = %name, "config overridden from environment");
            applied += 1;
        }

        if applied > 0 {
            let config: Self = tree.try_into()?;
            config.validate()?;
            *self = config;
        }
        Ok(())
    }

    /// Parse and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate TOML content.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve which config file would be read.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = config_path {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// `<platform config dir>/folio/config.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(PROJECT_NAME).join("config.toml"))
    }

    /// Reject configs the page cannot be built from.
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(Error::config("owner must not be empty"));
        }
        if self.contacts.identity.trim().is_empty() {
            return Err(Error::config("contacts.identity must not be empty"));
        }
        if self.feed.timeout_secs == 0 {
            return Err(Error::config("feed.timeout_secs must be greater than zero"));
        }
        self.tz()?;
        Ok(())
    }

    /// The configured timezone.
    pub fn tz(&self) -> Result<Tz> {
        Tz::from_str(&self.timezone).map_err(|_| Error::InvalidTimezone {
            name: self.timezone.clone(),
        })
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Flatten into `FOLIO_*` environment variable pairs, sorted by key.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value = toml::Value::try_from(self)?;
        let mut vars = Vec::new();
        flatten_env(&value, &PROJECT_NAME.to_uppercase(), &mut vars);
        vars.sort();
        Ok(vars)
    }
}

fn collect_env_fields(
    value: &toml::Value,
    prefix: &str,
    keys: &mut Vec<String>,
    out: &mut Vec<(String, Vec<String>)>,
) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                keys.push(key.clone());
                let name = format!("{prefix}_{}", key.to_uppercase());
                collect_env_fields(child, &name, keys, out);
                keys.pop();
            }
        }
        _ => out.push((prefix.to_string(), keys.clone())),
    }
}

fn parse_env_value(current: &toml::Value, name: &str, raw: &str) -> Result<toml::Value> {
    let invalid = |expected: &str| Error::config(format!("{name} must be {expected}, got '{raw}'"));
    match current {
        toml::Value::String(_) => Ok(toml::Value::String(raw.to_string())),
        toml::Value::Integer(_) => raw
            .trim()
            .parse::<i64>()
            .map(toml::Value::Integer)
            .map_err(|_| invalid("an integer")),
        toml::Value::Float(_) => raw
            .trim()
            .parse::<f64>()
            .map(toml::Value::Float)
            .map_err(|_| invalid("a number")),
        toml::Value::Boolean(_) => raw
            .trim()
            .parse::<bool>()
            .map(toml::Value::Boolean)
            .map_err(|_| invalid("true or false")),
        toml::Value::Array(_) => Ok(toml::Value::Array(
            raw.split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(|item| toml::Value::String(item.to_string()))
                .collect(),
        )),
        _ => Err(Error::config(format!("{name} cannot be set from the environment"))),
    }
}

fn flatten_env(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, child) in table {
                let name = format!("{prefix}_{}", key.to_uppercase());
                flatten_env(child, &name, out);
            }
        }
        toml::Value::Array(items) => {
            let joined = items
                .iter()
                .map(|item| match item {
                    toml::Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(",");
            out.push((prefix.to_string(), joined));
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}
