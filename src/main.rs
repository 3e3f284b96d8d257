use std::process::ExitCode;

fn main() -> ExitCode {
    // Run the CLI
    ghtoc::cli::run()
}
