use clap::Args;
use serde::Serialize;

use scaffold_rename::rename;
use scaffold_rename::{Error, RenameReport};
use std::path::Path;

use super::CmdResult;

#[derive(Args, Debug)]
pub struct RenameArgs {
    /// The new library name
    #[arg(long = "library-name", value_name = "NAME")]
    pub library_name: String,
}

#[derive(Serialize)]
#[serde(tag = "command")]
pub enum RenameOutput {
    #[serde(rename = "rename")]
    Rename(RenameReport),
}

pub fn run(args: RenameArgs) -> CmdResult<RenameOutput> {
    let base_path = std::env::current_dir().map_err(|e| {
        Error::internal_io(e.to_string(), Some("resolve working directory".to_string()))
    })?;

    run_in(&base_path, &args)
}

/// Step failures are reported in the output but never change the exit code.
fn run_in(base_path: &Path, args: &RenameArgs) -> CmdResult<RenameOutput> {
    let report = rename::rename_project(base_path, &args.library_name);
    Ok((RenameOutput::Rename(report), 0))
}
