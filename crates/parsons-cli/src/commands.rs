use anyhow::{Context, Result, bail};
use parsons_config::Config;
use parsons_engine::options::DEFAULT_TITLE;
use parsons_engine::parsing::dedent;
use parsons_engine::{
    Arrangement, PuzzleDefinition, PuzzleError, PuzzleOptions, RenderPayload, VerificationResult,
    WidgetId, build_puzzle, derive_identity, verify_submission,
};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::io;
use crate::source::split_header;

pub const EMPTY_PUZZLE_MESSAGE: &str = "(No lines provided for this Parsons puzzle.)";
pub const DEFAULT_OUTPUT_DIR: &str = "build/parsons";

/// Shown in place of a puzzle whose body has no statements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub widget_id: WidgetId,
    pub title: String,
    pub placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Rendered {
    Puzzle(Box<RenderPayload>),
    Placeholder(Placeholder),
}

impl Rendered {
    pub fn widget_id(&self) -> &WidgetId {
        match self {
            Rendered::Puzzle(payload) => &payload.widget_id,
            Rendered::Placeholder(placeholder) => &placeholder.widget_id,
        }
    }
}

/// Split off the header and layer its options over `defaults`
fn prepare(text: &str, defaults: &PuzzleOptions) -> (String, PuzzleOptions) {
    let source = split_header(text);
    for e in &source.ignored {
        log::warn!("ignoring header option: {e}");
    }
    (source.body, defaults.overlay(&source.options))
}

/// Build one source file's text, falling back to a placeholder when it is empty
pub fn render(text: &str, defaults: &PuzzleOptions) -> Rendered {
    let (body, options) = prepare(text, defaults);
    match build_puzzle(&body, &options) {
        Ok(built) => Rendered::Puzzle(Box::new(built.payload())),
        Err(PuzzleError::EmptyPuzzle) => {
            // The body is empty, so the header is all that tells placeholders apart
            let widget_id = derive_identity(&dedent(text));
            log::warn!("{widget_id}: {}", PuzzleError::EmptyPuzzle);
            Rendered::Placeholder(Placeholder {
                widget_id,
                title: options.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                placeholder: EMPTY_PUZZLE_MESSAGE.to_string(),
            })
        }
    }
}

/// Load the definition a source file describes; empty puzzles are an error here
pub fn definition_for(path: &Path, defaults: &PuzzleOptions) -> Result<PuzzleDefinition> {
    let text = io::read_file(path)?;
    let (body, options) = prepare(&text, defaults);
    let built = build_puzzle(&body, &options)
        .with_context(|| format!("Failed to build {}", path.display()))?;
    Ok(built.into_definition())
}

pub fn init(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite it",
            config_path.display()
        );
    }
    Config::default().save_to_path(config_path)?;
    log::info!("Wrote default config to {}", config_path.display());
    Ok(())
}

pub fn build(path: &Path, config: &Config) -> Result<String> {
    let text = io::read_file(path)?;
    let rendered = render(&text, &config.defaults);
    Ok(serde_json::to_string_pretty(&rendered)?)
}

pub fn solution(path: &Path, config: &Config) -> Result<String> {
    let definition = definition_for(path, &config.defaults)?;
    let arrangement: Arrangement = definition.solution();
    Ok(serde_json::to_string_pretty(&arrangement)?)
}

pub fn check(path: &Path, arrangement_path: &Path, config: &Config) -> Result<VerificationResult> {
    let definition = definition_for(path, &config.defaults)?;
    let submission = io::read_file(arrangement_path)?;
    Ok(verify_submission(&definition, &submission))
}

/// Build every configured puzzle and write `<widget-id>.json` for each.
///
/// Files are built in parallel, one thread per available core at most.
/// Returns the written paths in source order.
pub fn build_all(config: &Config, out: Option<PathBuf>) -> Result<Vec<PathBuf>> {
    let out_dir = out
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));
    let files = config.puzzle_files()?;
    log::info!(
        "Building {} puzzles from {}",
        files.len(),
        config.puzzle_dir.display()
    );

    let workers = std::thread::available_parallelism().map_or(1, |n| n.get());
    let results = render_files(&files, &config.defaults, workers);

    let mut seen: HashMap<WidgetId, PathBuf> = HashMap::new();
    let mut written = Vec::new();
    let mut failures = 0;
    for (path, result) in files.into_iter().zip(results) {
        let rendered = match result {
            Ok(rendered) => rendered,
            Err(e) => {
                log::error!("{}: {e}", path.display());
                failures += 1;
                continue;
            }
        };
        let widget_id = rendered.widget_id().clone();
        if let Some(first) = seen.get(&widget_id) {
            log::warn!(
                "{} has the same content as {}; both use widget id {widget_id}",
                path.display(),
                first.display()
            );
        } else {
            seen.insert(widget_id.clone(), path.clone());
        }
        written.push(io::write_json(&out_dir, widget_id.as_str(), &rendered)?);
    }

    if failures > 0 {
        bail!("{failures} puzzle file(s) could not be built");
    }
    Ok(written)
}

/// Read and render `files` on at most `workers` threads, keeping their order
fn render_files(
    files: &[PathBuf],
    defaults: &PuzzleOptions,
    workers: usize,
) -> Vec<Result<Rendered, io::IoError>> {
    let chunk_size = files.len().div_ceil(workers.max(1)).max(1);
    std::thread::scope(|scope| {
        let handles: Vec<_> = files
            .chunks(chunk_size)
            .map(|chunk| {
                let handle = scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|path| io::read_file(path).map(|text| render(&text, defaults)))
                        .collect::<Vec<_>>()
                });
                (chunk.len(), handle)
            })
            .collect();
        handles
            .into_iter()
            .flat_map(|(len, handle)| match handle.join() {
                Ok(results) => results,
                Err(_) => (0..len)
                    .map(|_| Err(io::IoError::Io(std::io::Error::other("build thread panicked"))))
                    .collect(),
            })
            .collect()
    })
}
