//! Handler functions for `folio config` subcommands.
//!
//! Also provides TOML dotted-key helpers used by `get` and `set`.

use std::path::{Path, PathBuf};

use folio_core::config::PROJECT_NAME;
use folio_core::{Error, FolioConfig, Result};

use crate::cli::ConfigAction;

// ============================================================================
// Command dispatch
// ============================================================================

/// Run one config subcommand.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => {
            println!("{}", cmd_config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let path = cmd_config_set(config_path, &key, &value)?;
            println!("Set {key} = {value} in {}", path.display());
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = cmd_config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = FolioConfig::load(config_path)?;
            for line in cmd_config_export(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

/// Show the resolved config file path.
pub fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = FolioConfig::resolve_config_path(config_path).ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist, run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Look up a configuration value by dotted key.
pub fn cmd_config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = FolioConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Set a value by dotted key in the config file.
///
/// The edited document must still be a valid configuration, otherwise the
/// file is left untouched.
pub fn cmd_config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<PathBuf> {
    let path = FolioConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;

    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `{PROJECT_NAME} config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;

    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    FolioConfig::from_toml_str(&toml_str)?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;

    tracing::debug!(key, path = %path.display(), "config value set");
    Ok(path)
}

/// Write a default configuration file.
pub fn cmd_config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => FolioConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    write_default(&path)?;
    Ok(path)
}

fn write_default(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    let toml_str = FolioConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))
}

/// Render the configuration as environment variable lines.
pub fn cmd_config_export(config: &FolioConfig, docker_env: bool) -> Result<Vec<String>> {
    let lines = config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect();
    Ok(lines)
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
pub fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let Some((last, parents)) = parts.split_last() else {
        return Err(Error::config("Empty key path"));
    };
    if last.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents {
        let table = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?;
        current = table
            .entry(part.to_string())
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    let table = current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?;
    table.insert(last.to_string(), value);
    Ok(())
}

/// Parse a string value into a TOML value, auto-detecting the type.
///
/// Priority: bool, then integer, then float, then string.
pub fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn write_config(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        std::fs::write(&path, FolioConfig::default().to_toml_string().unwrap()).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // cmd_config_get tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_get_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir);

        let value = cmd_config_get(Some(path.to_str().unwrap()), "server.port").unwrap();
        assert_eq!(value, "3000");
    }

    #[test]
    fn test_cmd_config_get_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir);

        let result = cmd_config_get(Some(path.to_str().unwrap()), "nonexistent.key");
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_set tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_set_nested_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir);

        cmd_config_set(Some(path.to_str().unwrap()), "feed.max_retries", "5").unwrap();

        let config = FolioConfig::from_file(&path).unwrap();
        assert_eq!(config.feed.max_retries, 5);
    }

    #[test]
    fn test_cmd_config_set_rejects_invalid_result() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write_config(&dir);
        let before = std::fs::read_to_string(&path).unwrap();

        let result = cmd_config_set(Some(path.to_str().unwrap()), "timezone", "Mars/Olympus");
        assert!(result.is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_cmd_config_set_missing_file() {
        let result = cmd_config_set(Some("/nonexistent/config.toml"), "owner", "x");
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_init tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_init_creates_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("folio").join("config.toml");

        cmd_config_init(Some(path.to_str().unwrap()), false).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[contacts]"));
        assert!(FolioConfig::from_toml_str(&content).is_ok());
    }

    #[test]
    fn test_cmd_config_init_no_overwrite() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let result = cmd_config_init(Some(path.to_str().unwrap()), false);
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[test]
    fn test_cmd_config_init_force_overwrites() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "old content").unwrap();

        cmd_config_init(Some(path.to_str().unwrap()), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("owner"));
    }

    // ------------------------------------------------------------------------
    // cmd_config_export tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_cmd_config_export_docker_env() {
        let lines = cmd_config_export(&FolioConfig::default(), true).unwrap();
        assert!(lines.iter().all(|l| l.starts_with("--env FOLIO_")));
        assert!(lines.contains(&"--env FOLIO_SERVER_PORT=3000".to_string()));
    }

    // ------------------------------------------------------------------------
    // dotted-key helper tests
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value_deep() {
        let val: toml::Value = toml::from_str("[a.b]\nc = 1").unwrap();
        assert_eq!(
            get_nested_value(&val, "a.b.c"),
            Some(&toml::Value::Integer(1))
        );
        assert_eq!(get_nested_value(&val, "a.x"), None);
    }

    #[test]
    fn test_set_nested_value_creates_tables() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "x.y.z", toml::Value::Boolean(true)).unwrap();
        assert_eq!(
            get_nested_value(&val, "x.y.z"),
            Some(&toml::Value::Boolean(true))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("port = 1").unwrap();
        assert!(set_nested_value(&mut val, "port.inner", toml::Value::Integer(2)).is_err());
    }

    #[test]
    fn test_parse_value_detects_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("1.5"), toml::Value::Float(1.5));
        assert_eq!(parse_value("Europe/Paris"), toml::Value::String("Europe/Paris".into()));
    }

    #[test]
    fn test_format_toml_value_scalars() {
        assert_eq!(format_toml_value(&toml::Value::String("hi".into())), "hi");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
