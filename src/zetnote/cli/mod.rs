//! # CLI Behavior
//!
//! This is one possible UI client for zetnote. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! ## Modes
//!
//! - `zetnote <command> ...` runs a single command and exits: 0 on success,
//!   2 on a usage error, 1 when the command fails (unknown or ambiguous id,
//!   I/O error).
//! - `zetnote` with no command starts the interactive prompt, which accepts
//!   the same commands plus `exit`. Failures are printed and the prompt
//!   carries on.
//!
//! Every run starts by rebuilding the short id index from the notes, so
//! short id collisions are reported at startup.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup, dispatch and per-command handlers
//! - `print`: Output formatting (colors, note lines, errors)
//! - `repl`: The interactive prompt
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
mod repl;
pub mod setup;

pub use commands::run;
pub use print::print_error;
