use std::process::ExitCode;

fn main() -> ExitCode {
    match cellplot::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cellplot: {e}");
            ExitCode::FAILURE
        }
    }
}
