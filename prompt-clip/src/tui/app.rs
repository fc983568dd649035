use std::sync::Arc;

use clip_client::PromptBackend;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use shared::models::Prompt;
use tokio::sync::mpsc;
use tui_input::{Input, InputRequest};
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::core::{ConfirmDialog, CopyToast, FormErrors, Modal, PromptClip, SubmitOutcome};

pub const DELETE_TITLE: &str = "Delete prompt?";
pub const DELETE_DESCRIPTION: &str = "This prompt will be removed permanently.";

/// Focusable parts of the creation form, in tab order
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FormFocus {
    #[default]
    Name,
    Content,
    TagInput,
    Tags,
    Submit,
}

impl FormFocus {
    const ORDER: [FormFocus; 5] = [
        FormFocus::Name,
        FormFocus::Content,
        FormFocus::TagInput,
        FormFocus::Tags,
        FormFocus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Results of spawned work, handed back to the render loop
#[derive(Debug)]
enum AppEvent {
    Submitted(Result<SubmitOutcome, FormErrors>),
}

/// UI-side state: selection, focus, text inputs and the delete dialog
///
/// Form values live in [`PromptClip`]; the inputs mirror them and are
/// re-synced whenever the root resets the form.
pub struct App<B> {
    root: Arc<PromptClip<B>>,
    toast: Arc<CopyToast>,
    delete_dialog: Arc<ConfirmDialog>,
    delete_target: Option<String>,
    pub(super) table_state: TableState,
    pub(super) focus: FormFocus,
    pub(super) name_input: Input,
    pub(super) content_input: Input,
    pub(super) tag_input: Input,
    pub(super) tag_cursor: usize,
    pub(super) form_errors: Option<FormErrors>,
    pub(super) logger_state: TuiWidgetState,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    should_quit: bool,
}

impl<B: PromptBackend + 'static> App<B> {
    pub fn new(root: Arc<PromptClip<B>>, toast: Arc<CopyToast>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            root,
            toast,
            delete_dialog: Arc::new(ConfirmDialog::new(DELETE_TITLE, DELETE_DESCRIPTION)),
            delete_target: None,
            table_state: TableState::default(),
            focus: FormFocus::default(),
            name_input: Input::default(),
            content_input: Input::default(),
            tag_input: Input::default(),
            tag_cursor: 0,
            form_errors: None,
            logger_state: TuiWidgetState::new(),
            events_tx,
            events_rx,
            should_quit: false,
        }
    }

    pub fn root(&self) -> &PromptClip<B> {
        &self.root
    }

    pub fn toast(&self) -> &CopyToast {
        &self.toast
    }

    pub fn delete_dialog(&self) -> &ConfirmDialog {
        &self.delete_dialog
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Fetch once on start
    pub fn load(&self) {
        let root = Arc::clone(&self.root);
        tokio::spawn(async move { root.load().await });
    }

    pub fn selected_prompt(&self) -> Option<Prompt> {
        let index = self.table_state.selected()?;
        self.root.prompts().into_iter().nth(index)
    }

    /// Apply results of finished background work
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Submitted(Ok(SubmitOutcome::Saved(prompt))) => {
                    tracing::debug!(prompt_id = %prompt.id, "Creation form closed after save");
                    self.form_errors = None;
                    self.sync_inputs();
                    self.focus = FormFocus::default();
                }
                AppEvent::Submitted(Ok(SubmitOutcome::SaveFailed)) => {
                    self.form_errors = None;
                }
                AppEvent::Submitted(Err(errors)) => {
                    self.form_errors = Some(errors);
                }
            }
        }
        self.clamp_selection();
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.delete_dialog.is_open() {
            self.handle_delete_key(key);
        } else if self.root.create_dialog().is_open() {
            self.handle_form_key(key);
        } else {
            self.handle_list_key(key);
        }
    }

    // ========== List ==========

    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('n') => {
                self.focus = FormFocus::default();
                self.form_errors = None;
                self.sync_inputs();
                self.root.create_dialog().open();
            }
            KeyCode::Char('c') | KeyCode::Enter => {
                if let Some(prompt) = self.selected_prompt() {
                    self.toast.copy(&prompt.content);
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(prompt) = self.selected_prompt() {
                    self.delete_target = Some(prompt.id);
                    self.delete_dialog.open();
                }
            }
            KeyCode::Esc => self.toast.dismiss(),
            KeyCode::Up | KeyCode::Char('k') => self.move_selection(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_selection(1),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ => {}
        }
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.root.prompts().len();
        if len == 0 {
            self.table_state.select(None);
            return;
        }
        let current = self.table_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.table_state.select(Some(next));
    }

    fn clamp_selection(&mut self) {
        let len = self.root.prompts().len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            None => self.table_state.select(Some(0)),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }

    // ========== Delete confirmation ==========

    fn handle_delete_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                let Some(prompt_id) = self.delete_target.take() else {
                    self.delete_dialog.cancel();
                    return;
                };
                let root = Arc::clone(&self.root);
                let dialog = Arc::clone(&self.delete_dialog);
                tokio::spawn(async move {
                    dialog
                        .confirm(|| async move { root.delete_prompt(&prompt_id).await })
                        .await;
                });
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.delete_target = None;
                self.delete_dialog.cancel();
            }
            _ => {}
        }
    }

    // ========== Creation form ==========

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.root.create_dialog().close();
                self.form_errors = None;
                self.sync_inputs();
            }
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                FormFocus::TagInput => self.add_tag(),
                FormFocus::Tags => self.remove_tag_at_cursor(),
                _ => self.submit(),
            },
            _ => match self.focus {
                FormFocus::Name => {
                    if let Some(req) = input_request(key) {
                        self.name_input.handle(req);
                        self.root.set_name(self.name_input.value());
                    }
                }
                FormFocus::Content => {
                    if let Some(req) = input_request(key) {
                        self.content_input.handle(req);
                        self.root.set_content(self.content_input.value());
                    }
                }
                FormFocus::TagInput => {
                    if let Some(req) = input_request(key) {
                        self.tag_input.handle(req);
                        self.root.set_tag_input(self.tag_input.value());
                    }
                }
                FormFocus::Tags => self.handle_tags_key(key),
                FormFocus::Submit => {}
            },
        }
    }

    fn handle_tags_key(&mut self, key: KeyEvent) {
        let count = self.root.form().pending_tags.len();
        match key.code {
            KeyCode::Left => self.tag_cursor = self.tag_cursor.saturating_sub(1),
            KeyCode::Right if self.tag_cursor + 1 < count => self.tag_cursor += 1,
            KeyCode::Delete | KeyCode::Backspace => self.remove_tag_at_cursor(),
            _ => {}
        }
    }

    fn add_tag(&mut self) {
        if let Some(tag) = self.root.add_pending_tag() {
            tracing::debug!(tag = %tag.name, "Pending tag added");
            self.tag_input = Input::default();
        }
    }

    fn remove_tag_at_cursor(&mut self) {
        let form = self.root.form();
        let Some(tag) = form.pending_tags.get(self.tag_cursor) else {
            return;
        };
        self.root.remove_pending_tag(&tag.id);
        let remaining = form.pending_tags.len() - 1;
        self.tag_cursor = self.tag_cursor.min(remaining.saturating_sub(1));
    }

    fn submit(&mut self) {
        let root = Arc::clone(&self.root);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = root.submit().await;
            // The receiver only goes away on shutdown
            let _ = tx.send(AppEvent::Submitted(outcome));
        });
    }

    /// Rebuild the text inputs from the root's form
    fn sync_inputs(&mut self) {
        let form = self.root.form();
        self.name_input = Input::new(form.name);
        self.content_input = Input::new(form.content);
        self.tag_input = Input::new(form.tag_input);
        self.tag_cursor = 0;
    }
}

fn input_request(key: KeyEvent) -> Option<InputRequest> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char(c) if !ctrl => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}
