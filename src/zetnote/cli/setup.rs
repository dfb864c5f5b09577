use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash for non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{} (dev: {})", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "zetnote",
    bin_name = "zetnote",
    version = get_version(),
    after_help = "Run without a command to start the interactive prompt."
)]
#[command(about = "A small Zettelkasten for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to ~/Documents/zetnote_data)
    #[arg(long, global = true, env = "ZETNOTE_DATA", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add a note
    Add {
        /// Note text; all words are joined with spaces
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Delete a note and every link to or from it
    #[command(alias = "rm")]
    Delete {
        /// Short id or long id prefix
        id: String,
    },

    /// Link the first note to the second (one direction only)
    Link {
        /// Note the link starts from
        from: String,

        /// Note the link points to
        to: String,
    },

    /// List all notes, oldest first
    #[command(alias = "ls")]
    List,

    /// Show a note and the notes it links to
    Show {
        /// Short id or long id prefix
        id: String,
    },

    /// Export all notes to exports/export_<YYYYMMDD>.txt
    Export,

    /// Export a note and everything reachable from it to exports/related_<short id>.txt
    ExportRelated {
        /// Short id or long id prefix
        id: String,
    },
}

/// A line typed at the interactive prompt.
#[derive(Parser, Debug)]
#[command(name = "zetnote", no_binary_name = true, disable_version_flag = true)]
pub struct ReplLine {
    #[command(subcommand)]
    pub command: ReplCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ReplCommand {
    #[command(flatten)]
    Note(Commands),

    /// Leave the prompt
    #[command(alias = "quit")]
    Exit,
}
