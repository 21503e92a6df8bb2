use crate::columns::assign_columns;
use crate::error::{Advisory, PuzzleError};
use crate::identity::{derive_identity, resolve_seed};
use crate::models::{PuzzleDefinition, Statement};
use crate::options::{PuzzleOptions, Settings};
use crate::parsing::{dedent, parse};
use crate::payload::RenderPayload;
use crate::scramble::scramble;

/// Result of building one puzzle from source: the canonical definition, the
/// order to present it in, and whatever the author should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPuzzle {
    definition: PuzzleDefinition,
    settings: Settings,
    presentation: Option<Vec<Statement>>,
    advisories: Vec<Advisory>,
}

/// Run the whole pipeline: resolve options, dedent, derive identity and
/// seed, parse, clamp column markers, then scramble.
///
/// The same `raw` and `options` always produce an equal [`BuiltPuzzle`].
pub fn build_puzzle(raw: &str, options: &PuzzleOptions) -> Result<BuiltPuzzle, PuzzleError> {
    let (settings, mut advisories) = options.resolve();

    let source = dedent(raw);
    let widget_id = derive_identity(&source);
    let seed = resolve_seed(settings.seed, &source);

    let parsed = parse(&source, settings.indent_step)?;
    advisories.extend(parsed.advisories);

    let mut statements = parsed.statements;
    for statement in statements.iter_mut().filter(|s| s.column >= settings.columns) {
        let advisory = Advisory::invalid(
            format!("column marker on line {}", statement.line_number),
            statement.column + 1,
            settings.columns,
        );
        log::warn!("{widget_id}: {advisory}");
        advisories.push(advisory);
        statement.column = settings.columns - 1;
    }

    let definition = PuzzleDefinition::new(
        widget_id,
        statements,
        assign_columns(settings.columns, &settings.labels),
        settings.indent_step,
        settings.check_mode,
        seed,
    );

    let presentation = match (settings.shuffle, settings.shuffle_on_server) {
        (false, _) => Some(definition.statements().to_vec()),
        (true, true) => Some(scramble(definition.statements(), seed)),
        (true, false) => None,
    };

    let built = BuiltPuzzle {
        definition,
        settings,
        presentation,
        advisories,
    };

    if built.settings.debug {
        match serde_json::to_string_pretty(&built.payload()) {
            Ok(json) => log::debug!("{} payload:\n{json}", built.definition.widget_id()),
            Err(e) => log::debug!("{} payload not serializable: {e}", built.definition.widget_id()),
        }
    }

    Ok(built)
}

impl BuiltPuzzle {
    pub fn definition(&self) -> &PuzzleDefinition {
        &self.definition
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Statements in display order; `None` when the client scrambles
    pub fn presentation(&self) -> Option<&[Statement]> {
        self.presentation.as_deref()
    }

    pub fn advisories(&self) -> &[Advisory] {
        &self.advisories
    }

    pub fn into_definition(self) -> PuzzleDefinition {
        self.definition
    }

    pub fn payload(&self) -> RenderPayload {
        let definition = &self.definition;
        RenderPayload {
            widget_id: definition.widget_id().clone(),
            title: self.settings.title.clone(),
            language: self.settings.language.clone(),
            statements: definition.statements().to_vec(),
            presentation_order: self
                .presentation
                .as_ref()
                .map(|order| order.iter().map(|s| s.line_number).collect()),
            shuffle_on_client: self.presentation.is_none(),
            check_mode: definition.check_mode(),
            indent_step: definition.indent_step(),
            columns: definition.column_specs().to_vec(),
            seed: definition.scramble_seed(),
        }
    }
}
