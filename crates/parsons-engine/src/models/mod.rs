pub mod arrangement;
pub mod check_mode;
pub mod definition;
pub mod statement;
pub mod verdict;

pub use arrangement::{Arrangement, Placement};
pub use check_mode::{CheckMode, UnknownCheckMode};
pub use definition::PuzzleDefinition;
pub use statement::Statement;
pub use verdict::{InvariantViolation, LineReport, LineStatus, VerificationResult};
