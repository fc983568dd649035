//! Presentation core
//!
//! Headless state containers behind the terminal UI: the application root
//! and the form, dialogs, toast and tag chips it composes.

pub mod clipboard;
pub mod collection;
pub mod dialog;
pub mod form;
pub mod state;
pub mod tag_list;
pub mod tags;
pub mod toast;

pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard, SystemClipboard};
pub use collection::{CollectionSlot, FetchTicket};
pub use dialog::{ConfirmDialog, EditDialog, Modal, ModalState};
pub use form::{FieldError, FormErrors, FormField, PromptForm};
pub use state::{PromptClip, SubmitOutcome};
pub use tag_list::{TagLabel, TagLabelList};
pub use tags::resolve_tags;
pub use toast::{CopyToast, TOAST_DURATION, TOAST_TITLE, TOOLTIP_TEXT};
