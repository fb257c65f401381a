//! ListKeeper command-line entry point.
//!
//! # Responsibility
//! - Act as the request layer: parse arguments, load one session, run one
//!   use-case call, show the flash once, render, commit.
//!
//! # Invariants
//! - Exactly one session slot is read and written per invocation.
//! - Domain failures are reported through the flash, not the exit status.

mod render;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listkeeper_core::db::open_db;
use listkeeper_core::service::tracker_service::parse_id;
use listkeeper_core::{
    init_logging, ItemId, ListId, Outcome, RequestContext, Route, SessionContext, SessionKey,
    SessionStore, SqliteSessionStore, TrackerConfig, TrackerService,
};
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "listkeeper", version, about = "Session-scoped list tracker")]
struct Cli {
    /// SQLite file holding session slots.
    #[arg(long)]
    db: Option<PathBuf>,
    /// Session to resume; a new one is created when omitted.
    #[arg(long)]
    session: Option<String>,
    #[arg(long)]
    log_level: Option<String>,
    /// Absolute directory for rotating log files.
    #[arg(long)]
    log_dir: Option<PathBuf>,
    /// Ask for minimal replies instead of redirects on deletes.
    #[arg(long)]
    minimal: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show all lists, incomplete first.
    Lists,
    /// Show one list and its items.
    Show {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
    },
    NewList {
        name: String,
    },
    RenameList {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
        name: String,
    },
    DeleteList {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
    },
    /// Add an item to a list.
    Add {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
        name: String,
    },
    DeleteItem {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
        #[arg(value_parser = parse_item_id)]
        item: ItemId,
    },
    /// Set an item's completion flag (`true` completes, anything else reopens).
    Toggle {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
        #[arg(value_parser = parse_item_id)]
        item: ItemId,
        completed: String,
    },
    CompleteAll {
        #[arg(value_parser = parse_list_id)]
        list: ListId,
    },
}

fn parse_list_id(raw: &str) -> Result<ListId, String> {
    parse_id(raw)
        .map(ListId)
        .ok_or_else(|| format!("`{raw}` is not a positive list id"))
}

fn parse_item_id(raw: &str) -> Result<ItemId, String> {
    parse_id(raw)
        .map(ItemId)
        .ok_or_else(|| format!("`{raw}` is not a positive item id"))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli, TrackerConfig::from_env());

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let key = match &config.session_key {
        Some(raw) => SessionKey::parse(raw)?,
        None => {
            let key = SessionKey::generate();
            println!("session={key}");
            key
        }
    };

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open `{}`", config.db_path.display()))?;
    let store = SqliteSessionStore::try_new(&conn)?;
    let request = RequestContext {
        wants_minimal_response: cli.minimal,
    };
    let mut session = SessionContext::load(store, key)?.with_request(request);

    respond(&cli.command, &mut session, &mut std::io::stdout().lock())?;
    session.commit()?;
    info!("event=cli_command module=cli status=ok");
    Ok(())
}

fn resolve_config(cli: &Cli, mut config: TrackerConfig) -> TrackerConfig {
    if let Some(db) = &cli.db {
        config.db_path = db.clone();
    }
    if let Some(session) = &cli.session {
        config.session_key = Some(session.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log_level = level.clone();
    }
    if let Some(log_dir) = &cli.log_dir {
        config.log_dir = Some(log_dir.clone());
    }
    config
}

/// Runs one command and writes its reply; the flash is consumed here.
fn respond<S: SessionStore>(
    command: &Command,
    session: &mut SessionContext<S>,
    out: &mut impl Write,
) -> io::Result<()> {
    let view = match run(command, session) {
        Some(outcome) => render::outcome_view(outcome, out)?,
        None => command_view(command),
    };
    if let Some(flash) = session.take_flash() {
        writeln!(out, "{}", render::flash_line(&flash))?;
    }
    if let Some(route) = view {
        render::route(session.collection(), route, out)?;
    }
    Ok(())
}

fn run<S: SessionStore>(
    command: &Command,
    session: &mut SessionContext<S>,
) -> Option<Outcome> {
    let mut service = TrackerService::new(session);
    let outcome = match command {
        Command::Lists | Command::Show { .. } => return None,
        Command::NewList { name } => service.create_list(name),
        Command::RenameList { list, name } => service.rename_list(*list, name),
        Command::DeleteList { list } => service.delete_list(*list),
        Command::Add { list, name } => service.add_item(*list, name),
        Command::DeleteItem { list, item } => service.delete_item(*list, *item),
        Command::Toggle {
            list,
            item,
            completed,
        } => service.toggle_item(*list, *item, completed),
        Command::CompleteAll { list } => service.complete_all(*list),
    };
    Some(outcome)
}

fn command_view(command: &Command) -> Option<Route> {
    match command {
        Command::Lists => Some(Route::Lists),
        Command::Show { list } => Some(Route::List(*list)),
        _ => None,
    }
}
