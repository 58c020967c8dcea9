use clap::Parser;

mod commands;
mod output;
mod tty;

use commands::rename;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = "scaffold-rename")]
#[command(version = VERSION)]
#[command(about = "Rename the placeholder library in a CMake library scaffold")]
struct Cli {
    #[command(flatten)]
    rename: rename::RenameArgs,
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let (json_result, exit_code) = commands::run_json(cli.rename);

    if output::print_json_result(json_result).is_err() {
        return std::process::ExitCode::from(1);
    }

    std::process::ExitCode::from(exit_code_to_u8(exit_code))
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
