pub type CmdResult<T> = scaffold_rename::Result<(T, i32)>;

pub mod rename;

pub(crate) fn run_json(
    args: rename::RenameArgs,
) -> (scaffold_rename::Result<serde_json::Value>, i32) {
    crate::tty::status("scaffold-rename is working...");

    crate::output::map_cmd_result_to_json(rename::run(args))
}
