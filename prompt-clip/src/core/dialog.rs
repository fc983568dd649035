//! Modal dialogs
//!
//! Both dialogs are thin wrappers: they own their open flag and the
//! lifecycle callbacks, never the content they show.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

/// Open/closed flag of a modal
#[derive(Debug, Default)]
pub struct ModalState {
    open: AtomicBool,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::SeqCst);
    }
}

/// A modal with a trigger and a close affordance
pub trait Modal {
    fn title(&self) -> &str;

    fn state(&self) -> &ModalState;

    fn is_open(&self) -> bool {
        self.state().is_open()
    }

    /// Trigger activated
    fn open(&self) {
        self.state().set_open(true);
    }

    fn close(&self) {
        self.state().set_open(false);
    }
}

/// Asks before a destructive action
#[derive(Debug)]
pub struct ConfirmDialog {
    title: String,
    description: String,
    state: ModalState,
}

impl ConfirmDialog {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            state: ModalState::default(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub const CANCEL_LABEL: &'static str = "Cancel";
    pub const CONFIRM_LABEL: &'static str = "Delete";

    /// Close without side effects
    pub fn cancel(&self) {
        self.close();
    }

    /// Run `action` and close once it has finished
    ///
    /// Does nothing and returns `false` if the dialog is not open.
    pub async fn confirm<F, Fut>(&self, action: F) -> bool
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = ()>,
    {
        if !self.is_open() {
            return false;
        }
        action().await;
        self.close();
        true
    }
}

impl Modal for ConfirmDialog {
    fn title(&self) -> &str {
        &self.title
    }

    fn state(&self) -> &ModalState {
        &self.state
    }
}

type ResetCallback = Box<dyn Fn() + Send + Sync>;

/// Wraps a form; closing it runs the reset callback
pub struct EditDialog {
    title: String,
    state: ModalState,
    on_close: ResetCallback,
}

impl EditDialog {
    pub fn new(title: impl Into<String>, on_close: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            title: title.into(),
            state: ModalState::default(),
            on_close: Box::new(on_close),
        }
    }
}

impl Modal for EditDialog {
    fn title(&self) -> &str {
        &self.title
    }

    fn state(&self) -> &ModalState {
        &self.state
    }

    fn close(&self) {
        (self.on_close)();
        self.state.set_open(false);
    }
}

impl std::fmt::Debug for EditDialog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditDialog")
            .field("title", &self.title)
            .field("open", &self.state.is_open())
            .finish()
    }
}
