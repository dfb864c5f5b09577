use super::commands::dispatch;
use super::print::print_error;
use super::setup::{ReplCommand, ReplLine};
use clap::Parser;
use colored::Colorize;
use std::io::{self, BufRead, Write};
use zetnote::api::ZetApi;
use zetnote::error::Result;
use zetnote::store::StorageBackend;

const PROMPT: &str = ">>> ";

/// The interactive prompt. Runs until `exit` or end of input; a failing
/// command prints its error and the prompt continues.
pub(super) fn run<B: StorageBackend>(api: &ZetApi<B>) -> Result<()> {
    println!("Welcome to zetnote!");
    println!("Data directory: {}", api.data_dir().display());
    println!(
        "{}\n",
        "Commands: add | delete | link | list | show | export | export-related | exit".dimmed()
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        match ReplLine::try_parse_from(words) {
            Ok(ReplLine {
                command: ReplCommand::Exit,
            }) => break,
            Ok(ReplLine {
                command: ReplCommand::Note(cmd),
            }) => {
                if let Err(e) = dispatch(api, cmd) {
                    print_error(&e);
                }
            }
            // Usage errors and --help land here; clap formats both.
            Err(e) => {
                let _ = e.print();
            }
        }
    }

    Ok(())
}
