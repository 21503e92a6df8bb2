//! Puzzle source files: an optional header of `:key: value` option lines
//! followed by the puzzle body.
//!
//! ```text
//! :title: Sum a list
//! :indent-step: 2
//! :shuffle-js:
//!
//! def total(nums): :lock:
//!   return sum(nums)
//! ```

use parsons_engine::PuzzleOptions;
use regex::Regex;
use std::sync::OnceLock;

static OPTION_LINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn option_line_regex() -> &'static Regex {
    OPTION_LINE_REGEX.get_or_init(|| {
        Regex::new(r"^:([a-z][a-z-]*):(?:\s+(.*?))?\s*$").expect("Invalid option line regex")
    })
}

/// A header line that could not be applied
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HeaderError {
    #[error("unknown option :{0}:")]
    UnknownOption(String),
    #[error("invalid value {value:?} for :{key}:")]
    InvalidValue { key: String, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleSource {
    pub options: PuzzleOptions,
    pub body: String,
    pub ignored: Vec<HeaderError>,
}

/// Separate the option header from the body.
///
/// The header ends at the first line that is neither blank nor an option
/// line. Without a header the body is the whole text, so line numbers match
/// the file.
pub fn split_header(text: &str) -> PuzzleSource {
    let lines: Vec<&str> = text.lines().collect();
    let mut options = PuzzleOptions::default();
    let mut ignored = Vec::new();
    let mut header_end = 0;

    for (index, line) in lines.iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some(captures) = option_line_regex().captures(line) else {
            break;
        };
        let key = &captures[1];
        let value = captures.get(2).map_or("", |m| m.as_str());
        if let Err(e) = apply_option(&mut options, key, value) {
            ignored.push(e);
        }
        header_end = index + 1;
    }

    let body = if header_end == 0 {
        text.to_string()
    } else {
        lines[header_end..]
            .iter()
            .skip_while(|line| line.trim().is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join("\n")
    };

    PuzzleSource {
        options,
        body,
        ignored,
    }
}

fn apply_option(options: &mut PuzzleOptions, key: &str, value: &str) -> Result<(), HeaderError> {
    let invalid = || HeaderError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };
    let text = || {
        if value.is_empty() {
            Err(invalid())
        } else {
            Ok(value.to_string())
        }
    };
    let flag = || if value.is_empty() { Ok(()) } else { Err(invalid()) };

    match key {
        "title" => options.title = Some(text()?),
        "language" => options.language = Some(text()?),
        "check-mode" => options.check_mode = Some(text()?),
        "columns" => options.columns = Some(value.parse().map_err(|_| invalid())?),
        "indent-step" => options.indent_step = Some(value.parse().map_err(|_| invalid())?),
        "seed" => options.seed = Some(value.parse().map_err(|_| invalid())?),
        "labels" => {
            options.labels = Some(value.split(',').map(|l| l.trim().to_string()).collect());
        }
        "shuffle" => {
            flag()?;
            options.shuffle = Some(true);
            options.shuffle_on_server = Some(true);
        }
        "shuffle-js" => {
            flag()?;
            options.shuffle = Some(true);
            options.shuffle_on_server = Some(false);
        }
        "no-shuffle" => {
            flag()?;
            options.shuffle = Some(false);
        }
        "debug" => {
            flag()?;
            options.debug = Some(true);
        }
        _ => return Err(HeaderError::UnknownOption(key.to_string())),
    }
    Ok(())
}
