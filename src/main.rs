//! Binary entrypoint for the `pdt` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Ignored when absent.
    let _ = dotenvy::dotenv();
    pdt::logging::init();

    // PDT_RECORD / PDT_REPLAY are handled in commands::dispatch.
    match pdt::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            pdt::ui::error(&err);
            ExitCode::FAILURE
        }
    }
}
