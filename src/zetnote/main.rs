//! The zetnote binary. The CLI lives in `cli/`; this file only invokes
//! `cli::run()` and handles process termination.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        cli::print_error(&e);
        std::process::exit(1);
    }
}
