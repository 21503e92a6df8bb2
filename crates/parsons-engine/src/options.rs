//! Author-supplied puzzle options and their validated form.
//!
//! [`PuzzleOptions`] mirrors what an author can write (in a config file or a
//! directive header), so every field is optional and numeric fields accept
//! out-of-range values. [`PuzzleOptions::resolve`] turns that into
//! [`Settings`], clamping or defaulting anything invalid and reporting each
//! adjustment as an [`Advisory`]. Invalid options never drop a puzzle.

use serde::{Deserialize, Serialize};

use crate::error::Advisory;
use crate::models::CheckMode;

pub const DEFAULT_TITLE: &str = "Parsons Puzzle";
pub const DEFAULT_LANGUAGE: &str = "python";
pub const DEFAULT_INDENT_STEP: usize = 4;
/// Widest layout a puzzle may ask for
pub const MAX_COLUMNS: usize = 12;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct PuzzleOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_step: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// `false` presents statements in canonical order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle: Option<bool>,
    /// `false` leaves scrambling to the client, using the exported seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shuffle_on_server: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

/// Validated options for one puzzle build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub title: String,
    pub language: String,
    pub columns: usize,
    pub labels: Vec<String>,
    pub indent_step: usize,
    pub check_mode: CheckMode,
    pub seed: Option<u64>,
    pub shuffle: bool,
    pub shuffle_on_server: bool,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            columns: 1,
            labels: Vec::new(),
            indent_step: DEFAULT_INDENT_STEP,
            check_mode: CheckMode::default(),
            seed: None,
            shuffle: true,
            shuffle_on_server: true,
            debug: false,
        }
    }
}

impl PuzzleOptions {
    /// Layer `overrides` on top of `self`; any option set in `overrides` wins.
    pub fn overlay(&self, overrides: &PuzzleOptions) -> PuzzleOptions {
        PuzzleOptions {
            title: overrides.title.clone().or_else(|| self.title.clone()),
            language: overrides.language.clone().or_else(|| self.language.clone()),
            columns: overrides.columns.or(self.columns),
            labels: overrides.labels.clone().or_else(|| self.labels.clone()),
            indent_step: overrides.indent_step.or(self.indent_step),
            check_mode: overrides
                .check_mode
                .clone()
                .or_else(|| self.check_mode.clone()),
            seed: overrides.seed.or(self.seed),
            shuffle: overrides.shuffle.or(self.shuffle),
            shuffle_on_server: overrides.shuffle_on_server.or(self.shuffle_on_server),
            debug: overrides.debug.or(self.debug),
        }
    }

    pub fn resolve(&self) -> (Settings, Vec<Advisory>) {
        let defaults = Settings::default();
        let mut advisories = Vec::new();

        let columns = match self.columns {
            Some(n) if n < 1 => {
                advisories.push(Advisory::invalid("columns", n, 1));
                1
            }
            Some(n) => match usize::try_from(n) {
                Ok(n) if n <= MAX_COLUMNS => n,
                _ => {
                    advisories.push(Advisory::invalid("columns", n, MAX_COLUMNS));
                    MAX_COLUMNS
                }
            },
            None => defaults.columns,
        };

        let indent_step = match self.indent_step {
            Some(n) if n < 1 => {
                advisories.push(Advisory::invalid("indent-step", n, 1));
                1
            }
            Some(n) => usize::try_from(n).unwrap_or(1),
            None => defaults.indent_step,
        };

        let check_mode = match self.check_mode.as_deref() {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                advisories.push(Advisory::invalid("check-mode", raw, CheckMode::default()));
                CheckMode::default()
            }),
            None => defaults.check_mode,
        };

        let mut labels = self.labels.clone().unwrap_or_default();
        if labels.len() > columns {
            advisories.push(Advisory::invalid(
                "labels",
                labels.join(","),
                labels[..columns].join(","),
            ));
            labels.truncate(columns);
        }

        for advisory in &advisories {
            log::warn!("{advisory}");
        }

        let settings = Settings {
            title: self.title.clone().unwrap_or(defaults.title),
            language: self.language.clone().unwrap_or(defaults.language),
            columns,
            labels,
            indent_step,
            check_mode,
            seed: self.seed,
            shuffle: self.shuffle.unwrap_or(defaults.shuffle),
            shuffle_on_server: self.shuffle_on_server.unwrap_or(defaults.shuffle_on_server),
            debug: self.debug.unwrap_or(defaults.debug),
        };
        (settings, advisories)
    }
}
