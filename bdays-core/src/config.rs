use directories::BaseDirs;
use serde::Deserialize;
use std::str::FromStr;
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::render::Language;
use crate::views::DEFAULT_UPCOMING_WINDOW_DAYS;

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute path of the birthdays file.
    pub entries_path: PathBuf,
    /// How many days ahead a birthday is surfaced as upcoming. Default is 3.
    pub upcoming_window_days: i64,
    /// Label set used for the display messages. Default is english.
    pub language: Language,
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    entries_path: Option<PathBuf>,
    upcoming_window_days: Option<i64>,
    /// `"english"` or `"russian"`.
    language: Option<String>,
}

impl Config {
    /// Public entrypoint: load config from disk (first XDG path, then native)
    /// and apply defaults. Missing file, unknown language or a non-positive
    /// window all fall back to the defaults.
    pub fn load() -> Result<Self> {
        let file_config = Self::read_file_config().unwrap_or_else(|_| FileConfig {
            entries_path: None,
            upcoming_window_days: None,
            language: None,
        });

        let entries_path = file_config
            .entries_path
            .unwrap_or_else(Self::default_entries_path);

        let upcoming_window_days = file_config
            .upcoming_window_days
            .filter(|days| *days > 0)
            .unwrap_or(DEFAULT_UPCOMING_WINDOW_DAYS);

        let language = file_config
            .language
            .as_deref()
            .and_then(|value| Language::from_str(value).ok())
            .unwrap_or_default();

        Ok(Self {
            entries_path,
            upcoming_window_days,
            language,
        })
    }

    /// Default entries file: `{data_dir}/bdays/BD.txt`
    /// - macOS:   `~/Library/Application Support/bdays/BD.txt`
    /// - Linux:   `$XDG_DATA_HOME/bdays/BD.txt` or `~/.local/share/bdays/BD.txt`
    /// - Windows: `%APPDATA%\bdays\BD.txt`
    fn default_entries_path() -> PathBuf {
        if let Some(base) = BaseDirs::new() {
            let mut p = base.data_dir().to_path_buf();
            p.push("bdays");
            p.push("BD.txt");
            p
        } else {
            PathBuf::from("./BD.txt")
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b
                .home_dir()
                .join(".config")
                .join("bdays")
                .join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("bdays").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig {
            entries_path: None,
            upcoming_window_days: None,
            language: None,
        })
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::path::Path;

    /// Test helper to create a default `Config` for testing purposes.
    ///
    /// This is the single source of truth for test configuration.
    /// If you add a field to `Config`, you only need to update it here.
    pub(crate) fn mk_config(entries_path: PathBuf) -> Config {
        Config {
            entries_path,
            upcoming_window_days: DEFAULT_UPCOMING_WINDOW_DAYS,
            language: Language::English,
        }
    }

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b
                .home_dir()
                .join(".config")
                .join("bdays")
                .join("config.toml");
            let expected_native = b.config_dir().join("bdays").join("config.toml");
            let c = super::Config::config_file_paths();
            assert_eq!(c.first(), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn parse_file_accepts_all_fields() {
        let toml = r#"
            entries_path = "/tmp/my-birthdays.txt"
            upcoming_window_days = 7
            language = "russian"
        "#;
        let fc = super::Config::parse_file(toml).unwrap();
        assert_eq!(
            fc.entries_path.as_deref(),
            Some(Path::new("/tmp/my-birthdays.txt"))
        );
        assert_eq!(fc.upcoming_window_days, Some(7));
        assert_eq!(fc.language.as_deref(), Some("russian"));
    }

    #[test]
    fn parse_file_accepts_an_empty_config() {
        let fc = super::Config::parse_file("").unwrap();
        assert!(fc.entries_path.is_none());
        assert!(fc.upcoming_window_days.is_none());
        assert!(fc.language.is_none());
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let fc = super::Config::parse_file(r#"language = "klingon""#).unwrap();
        let language = fc
            .language
            .as_deref()
            .and_then(|value| Language::from_str(value).ok())
            .unwrap_or_default();
        assert_eq!(language, Language::English);
    }
}
