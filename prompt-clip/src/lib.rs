//! Prompt Clip - keep reusable prompts one keystroke from the clipboard
//!
//! The store runs in-process behind the named-call bridge; the terminal UI
//! renders the headless state containers from [`core`].

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod tui;

use std::sync::Arc;

use clip_client::{InProcessTransport, InvokeBackend};
use clip_store::{CommandHandler, PromptStore};

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use crate::core::{Clipboard, CopyToast, PromptClip, SystemClipboard};

/// Open the store, wire the client and run the UI until the user quits
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let data_dir = config.data_dir();
    std::fs::create_dir_all(&data_dir).map_err(AppError::from)?;

    let _guard = logging::init(&config.log_level, &config.log_dir())?;

    std::panic::set_hook(Box::new(|info| {
        tui::restore_terminal_on_panic();
        let backtrace = std::backtrace::Backtrace::capture();
        eprintln!("Prompt Clip panicked: {info}\n{backtrace}");
        tracing::error!(target: "panic", message = %info, "panic occurred");
    }));

    tracing::info!(data_dir = %data_dir.display(), "Prompt Clip starting");

    let store = PromptStore::open(&config.database_path())
        .await
        .map_err(AppError::from)?;
    let transport = InProcessTransport::new(CommandHandler::new(store));
    let root = Arc::new(PromptClip::new(InvokeBackend::new(transport)));

    let clipboard: Arc<dyn Clipboard> = Arc::new(SystemClipboard::new());
    let toast = Arc::new(CopyToast::with_delay(clipboard, config.toast_duration()));

    tui::run(root, toast).await?;

    tracing::info!("Prompt Clip stopped");
    Ok(())
}
