//! Config file and phonebook path resolution.
//!
//! The phonebook path comes from, in order: `--file` / `PHONEBOOK_FILE`,
//! the `[phonebook] path` key of the config file, then `phonebook.json` in
//! the working directory. A missing config file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File used when nothing else names one.
pub const DEFAULT_BOOK_FILE: &str = "phonebook.json";

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookConfig {
    #[serde(default)]
    pub phonebook: PhonebookSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PhonebookSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UiSection {
    #[serde(default)]
    pub no_color: bool,
    #[serde(default)]
    pub ascii: bool,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config named on the command line, else the default one.
///
/// Without an explicit path and without `HOME`, defaults are used.
pub fn load_effective_config(explicit: Option<&Path>) -> anyhow::Result<PhonebookConfig> {
    match explicit {
        Some(path) => read_config(path),
        None => match default_config_path() {
            Ok(path) => load_config(&path),
            Err(err) => {
                tracing::debug!(error = %err, "no default config location");
                Ok(PhonebookConfig::default())
            }
        },
    }
}

/// Read the config file, or defaults when it does not exist.
pub fn load_config(path: &Path) -> anyhow::Result<PhonebookConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(PhonebookConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<PhonebookConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Pick the phonebook file: explicit flag, then config, then the default.
pub fn resolve_book_path(flag: Option<&Path>, config: &PhonebookConfig) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    match config.phonebook.path.as_deref().map(str::trim) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_BOOK_FILE),
    }
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("phonebook"));
        }
    }
    Ok(home_dir()?.join(".config").join("phonebook"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_flag_wins() {
        let config = PhonebookConfig {
            phonebook: PhonebookSection {
                path: Some("from-config.json".to_string()),
            },
            ..Default::default()
        };
        let path = resolve_book_path(Some(Path::new("flag.json")), &config);
        assert_eq!(path, PathBuf::from("flag.json"));
    }

    #[test]
    fn test_config_then_default() {
        let config = PhonebookConfig {
            phonebook: PhonebookSection {
                path: Some("from-config.json".to_string()),
            },
            ..Default::default()
        };
        assert_eq!(
            resolve_book_path(None, &config),
            PathBuf::from("from-config.json")
        );
        assert_eq!(
            resolve_book_path(None, &PhonebookConfig::default()),
            PathBuf::from(DEFAULT_BOOK_FILE)
        );
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let config = load_config(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, PhonebookConfig::default());
    }

    #[test]
    fn test_read_config_sections() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[phonebook]\npath = \"/tmp/contacts.json\"\n\n[ui]\nno_color = true\n",
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.phonebook.path.as_deref(), Some("/tmp/contacts.json"));
        assert!(config.ui.no_color);
        assert!(!config.ui.ascii);
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = tempdir().unwrap();
        assert!(load_effective_config(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_bad_config_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[phonebook\n").unwrap();
        let err = read_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config"));
    }
}
