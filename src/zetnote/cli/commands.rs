use super::print::{print_messages, print_note_view, print_notes};
use super::repl;
use super::setup::{Cli, Commands};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use zetnote::api::ZetApi;
use zetnote::config::{default_data_dir, ZetConfig};
use zetnote::error::Result;
use zetnote::store::fs::FsBackend;
use zetnote::store::StorageBackend;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let api = init_context(&cli)?;

    match cli.command {
        Some(cmd) => dispatch(&api, cmd),
        None => repl::run(&api),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "zetnote=debug" } else { "error" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolves the data directory, loads its config and runs startup
/// maintenance (document creation, short index rebuild).
fn init_context(cli: &Cli) -> Result<ZetApi<FsBackend>> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => default_data_dir()?,
    };
    debug!(data_dir = %data_dir.display(), "using data directory");

    let config = ZetConfig::load(&data_dir)?;
    let api = ZetApi::new(FsBackend::new(config));

    let startup = api.init()?;
    print_messages(&startup.messages);
    Ok(api)
}

/// Runs one command. Shared by one-shot invocations and the prompt.
pub(super) fn dispatch<B: StorageBackend>(api: &ZetApi<B>, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Add { text } => handle_add(api, text),
        Commands::Delete { id } => handle_delete(api, &id),
        Commands::Link { from, to } => handle_link(api, &from, &to),
        Commands::List => handle_list(api),
        Commands::Show { id } => handle_show(api, &id),
        Commands::Export => handle_export(api),
        Commands::ExportRelated { id } => handle_export_related(api, &id),
    }
}

fn handle_add<B: StorageBackend>(api: &ZetApi<B>, text: Vec<String>) -> Result<()> {
    let result = api.add_note(text.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete<B: StorageBackend>(api: &ZetApi<B>, id: &str) -> Result<()> {
    let result = api.delete_note(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_link<B: StorageBackend>(api: &ZetApi<B>, from: &str, to: &str) -> Result<()> {
    let result = api.link_notes(from, to)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list<B: StorageBackend>(api: &ZetApi<B>) -> Result<()> {
    let result = api.list_notes()?;
    print_notes(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_show<B: StorageBackend>(api: &ZetApi<B>, id: &str) -> Result<()> {
    let result = api.show_note(id)?;
    if let Some(view) = &result.viewed {
        print_note_view(view);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_export<B: StorageBackend>(api: &ZetApi<B>) -> Result<()> {
    let result = api.export_all()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export_related<B: StorageBackend>(api: &ZetApi<B>, id: &str) -> Result<()> {
    let result = api.export_related(id)?;
    print_messages(&result.messages);
    Ok(())
}
