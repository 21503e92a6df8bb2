pub mod columns;
pub mod error;
pub mod identity;
pub mod models;
pub mod options;
pub mod parsing;
pub mod payload;
pub mod puzzle;
pub mod scramble;
pub mod verify;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use columns::{ColumnSpec, assign_columns};
pub use error::{Advisory, PuzzleError};
pub use identity::{WidgetId, derive_identity, resolve_seed};
pub use models::*;
pub use options::{PuzzleOptions, Settings};
pub use parsing::{ParsedSource, parse};
pub use payload::RenderPayload;
pub use puzzle::{BuiltPuzzle, build_puzzle};
pub use scramble::scramble;
pub use verify::{verify, verify_submission};
