//! Public output types for rename runs.
//!
//! These are returned by the orchestrator and serialized as-is by the CLI.

use serde::Serialize;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    ModifyFile,
    RenameDirectory,
}

/// Outcome of a single manifest step.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    pub kind: StepKind,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renamed_to: Option<String>,
    pub success: bool,
    /// Whether the substitutions altered the file content.
    pub changed: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl StepReport {
    pub fn failed(kind: StepKind, path: String, err: &Error) -> Self {
        Self {
            kind,
            path,
            renamed_to: None,
            success: false,
            changed: false,
            message: err.describe(),
            error_code: Some(err.code.as_str().to_string()),
        }
    }
}

// ============================================================================
// Run Summary
// ============================================================================

/// Result of running the whole manifest.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameReport {
    pub library_name: String,
    pub library_name_upper: String,
    pub base_path: String,
    pub steps: Vec<StepReport>,
    pub summary: RenameSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenameSummary {
    pub total: u32,
    pub succeeded: u32,
    pub failed: u32,
}

impl RenameSummary {
    pub fn from_steps(steps: &[StepReport]) -> Self {
        let succeeded = steps.iter().filter(|s| s.success).count() as u32;
        let total = steps.len() as u32;
        Self {
            total,
            succeeded,
            failed: total - succeeded,
        }
    }
}
