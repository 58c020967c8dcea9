// Public modules
pub mod error;
pub mod manifest;
pub mod output;
pub mod rename;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
pub use output::{RenameReport, RenameSummary, StepKind, StepReport};
