//! Rename orchestrator: rewrite the scaffold's placeholder name in place.
//!
//! Each step is independent: a missing file or an occupied destination is
//! reported and the run moves on. There is no rollback, so a partial run
//! leaves the tree half renamed.

use std::path::Path;

use crate::error::{Error, PathKind, Result};
use crate::manifest::{self, LibraryName, Step, Substitution};
use crate::output::{RenameReport, RenameSummary, StepKind, StepReport};
use crate::utils::io;

/// Rewrite `file_path` with `substitutions`, then optionally rename it
/// within its parent directory.
pub fn replace_and_rename(
    file_path: &Path,
    substitutions: &[Substitution],
    new_file_name: Option<&str>,
) -> Result<StepReport> {
    if !file_path.exists() {
        return Err(Error::rename_source_not_found(
            PathKind::File,
            file_path.display().to_string(),
        ));
    }

    let content = io::read_file(file_path, &format!("read {}", file_path.display()))?;
    let updated = manifest::apply_substitutions(&content, substitutions);
    io::write_file(file_path, &updated, &format!("write {}", file_path.display()))?;

    let changed = updated != content;
    let path = file_path.display().to_string();

    let Some(new_name) = new_file_name else {
        return Ok(StepReport {
            kind: StepKind::ModifyFile,
            message: format!("Modified {}", path),
            path,
            renamed_to: None,
            success: true,
            changed,
            error_code: None,
        });
    };

    let parent = file_path.parent().ok_or_else(|| {
        Error::internal_io(
            format!("Invalid path: {}", path),
            Some("rename file".to_string()),
        )
    })?;
    let new_path = parent.join(new_name);
    io::rename_path(
        file_path,
        &new_path,
        &format!("rename {} → {}", path, new_path.display()),
    )?;

    let renamed_to = new_path.display().to_string();
    Ok(StepReport {
        kind: StepKind::ModifyFile,
        message: format!("Modified and renamed file to {}", renamed_to),
        path,
        renamed_to: Some(renamed_to),
        success: true,
        changed,
        error_code: None,
    })
}

/// Resolve `file_subpath` against `base_path` and modify that file.
pub fn modify_file(
    base_path: &Path,
    file_subpath: &str,
    substitutions: &[Substitution],
    new_file_name: Option<&str>,
) -> Result<StepReport> {
    let file_path = manifest::resolve(base_path, file_subpath);
    replace_and_rename(&file_path, substitutions, new_file_name)
}

/// Move a directory. Never overwrites or merges into an existing destination.
pub fn rename_directory(old_dir_path: &Path, new_dir_path: &Path) -> Result<StepReport> {
    if !old_dir_path.exists() {
        return Err(Error::rename_source_not_found(
            PathKind::Directory,
            old_dir_path.display().to_string(),
        ));
    }

    if new_dir_path.exists() {
        return Err(Error::rename_destination_exists(
            new_dir_path.display().to_string(),
        ));
    }

    let from = old_dir_path.display().to_string();
    let to = new_dir_path.display().to_string();
    io::rename_path(
        old_dir_path,
        new_dir_path,
        &format!("rename directory {} → {}", from, to),
    )?;

    Ok(StepReport {
        kind: StepKind::RenameDirectory,
        message: format!("Renamed directory {} to {}", from, to),
        path: from,
        renamed_to: Some(to),
        success: true,
        changed: false,
        error_code: None,
    })
}

/// Run every step in order, logging each outcome. Failures never stop the run.
pub fn run_manifest(base_path: &Path, steps: &[Step]) -> Vec<StepReport> {
    steps
        .iter()
        .map(|step| {
            let (kind, path, result) = match step {
                Step::ModifyFile(entry) => (
                    StepKind::ModifyFile,
                    manifest::resolve(base_path, &entry.path),
                    modify_file(
                        base_path,
                        &entry.path,
                        &entry.substitutions,
                        entry.new_name.as_deref(),
                    ),
                ),
                Step::RenameDirectory(dir) => {
                    let from = dir.source(base_path);
                    let to = dir.target(base_path);
                    let result = rename_directory(&from, &to);
                    (StepKind::RenameDirectory, from, result)
                }
            };

            match result {
                Ok(report) => {
                    crate::log_status!("rename", "{}", report.message);
                    report
                }
                Err(err) => {
                    crate::log_status!("rename", "{}", err.describe());
                    StepReport::failed(kind, path.display().to_string(), &err)
                }
            }
        })
        .collect()
}

/// Rename the scaffold rooted at `base_path` to `library_name`.
pub fn rename_project(base_path: &Path, library_name: &str) -> RenameReport {
    let library = LibraryName::new(library_name);
    let steps = run_manifest(base_path, &manifest::scaffold_manifest(&library));
    let summary = RenameSummary::from_steps(&steps);

    RenameReport {
        library_name: library.as_str().to_string(),
        library_name_upper: library.upper().to_string(),
        base_path: base_path.display().to_string(),
        steps,
        summary,
    }
}
