//! Terminal front end
//!
//! Renders the prompt list with the creation and delete dialogs, the copy
//! toast and a log pane. Backend work is spawned off the render loop.

mod app;
mod ui;

pub use app::{App, FormFocus};

use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;

use clip_client::PromptBackend;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::core::{CopyToast, PromptClip};

const TICK: Duration = Duration::from_millis(100);

/// Take over the terminal and run until the user quits
pub async fn run<B>(root: Arc<PromptClip<B>>, toast: Arc<CopyToast>) -> io::Result<()>
where
    B: PromptBackend + 'static,
{
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let mut app = App::new(root, toast);
    app.load();

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<B>,
) -> io::Result<()>
where
    B: PromptBackend + 'static,
{
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            && matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat)
        {
            app.handle_key(key);
        }

        app.drain_events();

        if app.should_quit() {
            return Ok(());
        }

        // Let spawned backend work make progress between frames
        tokio::task::yield_now().await;
    }
}

/// Best-effort terminal restore from the panic hook
pub fn restore_terminal_on_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
