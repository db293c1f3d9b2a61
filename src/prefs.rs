use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use anyhow::Result;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme '{0}', expected light, dark or system")]
pub struct ThemeParseError(String);

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        };
        f.write_str(name)
    }
}

impl Theme {
    /// Whether the dark palette applies.
    pub fn resolve(self, system_is_dark: bool) -> bool {
        match self {
            Theme::Dark => true,
            Theme::Light => false,
            Theme::System => system_is_dark,
        }
    }

    /// The explicit theme picked by flipping a switch that currently shows
    /// `currently_dark`.
    pub fn toggled(currently_dark: bool) -> Theme {
        if currently_dark { Theme::Light } else { Theme::Dark }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefs {
    #[serde(default)]
    pub theme: Theme,
}

pub fn get_prefs_path() -> Option<PathBuf> {
    ProjectDirs::from("dev", "folio", "folio-palette")
        .map(|dirs| dirs.data_dir().join("prefs.json"))
}

pub fn load_prefs_from(path: &Path) -> Prefs {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable prefs at {:?}: {}", path, e);
            Prefs::default()
        }),
        Err(_) => Prefs::default(),
    }
}

pub fn save_prefs_to(path: &Path, prefs: &Prefs) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

pub fn load_prefs() -> Prefs {
    get_prefs_path().map(|p| load_prefs_from(&p)).unwrap_or_default()
}

pub fn save_prefs(prefs: &Prefs) -> Result<()> {
    match get_prefs_path() {
        Some(path) => save_prefs_to(&path, prefs),
        None => anyhow::bail!("no data directory available for preferences"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        assert_eq!("Dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!(" light ".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!("system".parse::<Theme>(), Ok(Theme::System));
        assert!("sepia".parse::<Theme>().is_err());
        assert_eq!(Theme::Dark.to_string(), "dark");
    }

    #[test]
    fn resolve_follows_system_only_for_system() {
        assert!(Theme::Dark.resolve(false));
        assert!(!Theme::Light.resolve(true));
        assert!(Theme::System.resolve(true));
        assert!(!Theme::System.resolve(false));
    }

    #[test]
    fn toggle_picks_explicit_theme() {
        assert_eq!(Theme::toggled(true), Theme::Light);
        assert_eq!(Theme::toggled(false), Theme::Dark);
    }

    #[test]
    fn missing_file_defaults_to_system() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_prefs_from(&dir.path().join("prefs.json")).theme, Theme::System);
    }

    #[test]
    fn corrupt_file_defaults_to_system() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        assert_eq!(load_prefs_from(&path).theme, Theme::System);
    }

    #[test]
    fn saved_theme_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.json");
        save_prefs_to(&path, &Prefs { theme: Theme::Dark }).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("\"dark\""));
        assert_eq!(load_prefs_from(&path).theme, Theme::Dark);
    }
}
