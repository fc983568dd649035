//! Copy-to-clipboard control
//!
//! Copying shows a confirmation toast that closes by itself after a fixed
//! delay or when dismissed. Each copy cancels the previous auto-dismiss
//! timer, so the toast always stays up for the full delay after the latest
//! copy.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;

use super::clipboard::Clipboard;

/// How long the toast stays open after a copy
pub const TOAST_DURATION: Duration = Duration::from_millis(5000);

pub const TOOLTIP_TEXT: &str = "Copy to clipboard";
pub const TOAST_TITLE: &str = "Copied to clipboard";

/// Auto-dismiss armed by one copy
struct DismissTimer {
    generation: u64,
    token: CancellationToken,
    deadline: tokio::time::Instant,
}

pub struct CopyToast {
    clipboard: Arc<dyn Clipboard>,
    delay: Duration,
    open: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
    timer: Arc<Mutex<Option<CancellationToken>>>,
}

impl CopyToast {
    pub fn new(clipboard: Arc<dyn Clipboard>) -> Self {
        Self::with_delay(clipboard, TOAST_DURATION)
    }

    pub fn with_delay(clipboard: Arc<dyn Clipboard>, delay: Duration) -> Self {
        Self {
            clipboard,
            delay,
            open: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
            timer: Arc::new(Mutex::new(None)),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    /// Always available, whatever the toast state
    pub fn tooltip(&self) -> &'static str {
        TOOLTIP_TEXT
    }

    /// Copy `text` and (re)open the toast
    ///
    /// Must be called from within a tokio runtime. A failed clipboard write
    /// is logged and otherwise ignored. The previous timer is retired before
    /// the toast opens, so it cannot close the toast of this copy.
    pub fn copy(&self, text: &str) {
        let timer = self.restart_timer();
        self.open.store(true, Ordering::SeqCst);
        if let Err(e) = self.clipboard.write_text(text) {
            tracing::debug!(error = %e, "Clipboard write failed");
        }
        self.spawn_dismiss(timer);
    }

    /// Explicit close from the toast itself
    pub fn dismiss(&self) {
        let mut timer = self.timer.lock();
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(token) = timer.take() {
            token.cancel();
        }
        self.open.store(false, Ordering::SeqCst);
    }

    /// Retire the running timer and arm a new one
    ///
    /// The generation only moves under the timer lock, which the dismiss
    /// task also holds while it checks and closes.
    fn restart_timer(&self) -> DismissTimer {
        let mut timer = self.timer.lock();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let token = CancellationToken::new();
        if let Some(previous) = timer.replace(token.clone()) {
            previous.cancel();
        }
        DismissTimer {
            generation,
            token,
            deadline: tokio::time::Instant::now() + self.delay,
        }
    }

    fn spawn_dismiss(&self, timer: DismissTimer) {
        let open = self.open.clone();
        let current = self.generation.clone();
        let lock = self.timer.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = timer.token.cancelled() => {}
                _ = tokio::time::sleep_until(timer.deadline) => {
                    let _held = lock.lock();
                    // a newer copy may have raced the cancellation
                    if current.load(Ordering::SeqCst) == timer.generation {
                        open.store(false, Ordering::SeqCst);
                    }
                }
            }
        });
    }
}

impl Drop for CopyToast {
    fn drop(&mut self) {
        if let Some(token) = self.timer.lock().take() {
            token.cancel();
        }
    }
}
