use std::sync::Arc;

use clap::{Parser, Subcommand};
use shoplist::config::AppConfig;
use shoplist::model::{ItemId, ListId};
use shoplist::services::persistence::PersistError;
use shoplist::services::settings::Language;
use shoplist::state::AppState;
use shoplist::storage::{SqliteStore, StorageError};
use shoplist::view;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to open storage: {0}")]
    Storage(#[from] StorageError),
    #[error("failed to persist changes: {0}")]
    Persist(#[from] PersistError),
}

#[derive(Parser, Debug)]
#[command(name = "shoplist", about = "Shopping lists stored on this device")]
struct Cli {
    /// `SQLite` database URL.
    #[arg(long, env = "SHOPLIST_DATABASE_URL")]
    database_url: Option<String>,

    /// UI language code: en, fi, sv or de.
    #[arg(long, env = "SHOPLIST_LANG")]
    lang: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show every list.
    Show,
    /// Create a new list.
    NewList { name: String },
    /// Remove a list and its items.
    RemoveList { list_id: ListId },
    /// Expand or collapse a list.
    Expand { list_id: ListId },
    /// Add an item to a list.
    AddItem { list_id: ListId, text: String },
    /// Remove an item from a list.
    RemoveItem { list_id: ListId, item_id: ItemId },
    /// Check or uncheck an item.
    Toggle { list_id: ListId, item_id: ItemId },
    /// Remove every item from a list.
    ClearItems { list_id: ListId },
    /// Remove checked items from a list.
    ClearCompleted { list_id: ListId },
    /// Set the display name shown in the welcome message.
    SetName { name: String },
    /// Show the available languages and their strings.
    Languages,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    if let Some(code) = cli.lang {
        match Language::from_code(&code) {
            Some(language) => config.language = language,
            None => tracing::warn!(code = %code, fallback = %config.language, "unknown language code"),
        }
    }

    let store = SqliteStore::open(&config.database_url).await?;
    let mut state = AppState::load(Arc::new(store), &config).await;

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => {}
        Command::NewList { name } => {
            if state.create_list(&name).await.is_none() {
                tracing::warn!("list name is empty; nothing created");
            }
        }
        Command::RemoveList { list_id } => state.delete_list(list_id).await,
        Command::Expand { list_id } => state.toggle_list_expanded(list_id).await,
        Command::AddItem { list_id, text } => {
            if state.create_item(list_id, &text).await.is_none() {
                tracing::warn!(list_id, "item not added (empty text or unknown list)");
            }
        }
        Command::RemoveItem { list_id, item_id } => state.delete_item(list_id, item_id).await,
        Command::Toggle { list_id, item_id } => state.toggle_item_completed(list_id, item_id).await,
        Command::ClearItems { list_id } => state.clear_items(list_id).await,
        Command::ClearCompleted { list_id } => state.remove_completed_items(list_id).await,
        Command::SetName { name } => {
            state.set_user_name(&name).await;
        }
        Command::Languages => {
            print!("{}", view::render_languages(state.settings().language()));
            state.shutdown().await;
            return Ok(());
        }
    }

    print!("{}", view::render(state.lists(), state.profile(), state.settings()));
    state.flush().await?;
    state.shutdown().await;
    Ok(())
}
