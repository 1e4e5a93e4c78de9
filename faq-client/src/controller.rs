//! UI controller state for the FAQ list.
//!
//! The controller owns a snapshot of the collection fetched from the server.
//! Every successful mutation reloads the snapshot wholesale, and searching
//! only changes the filtered view, never the snapshot itself.

use crate::api_client::{ApiError, FaqBackend};
use crate::search::filter_faqs;
use shared_types::{FaqInput, FaqRecord};
use std::collections::HashSet;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, warn};

/// How long a feedback banner stays visible.
pub const BANNER_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Dialog {
    #[default]
    Closed,
    Create,
    Edit(String),
    ConfirmDelete(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    shown_at: Instant,
}

impl Banner {
    fn new(kind: BannerKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.duration_since(self.shown_at) >= BANNER_TIMEOUT
    }
}

/// Shared create/edit form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
}

impl FaqForm {
    fn to_input(&self) -> Option<FaqInput> {
        let question = self.question.trim();
        let answer = self.answer.trim();
        if question.is_empty() || answer.is_empty() {
            return None;
        }
        Some(FaqInput::new(question, answer))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Escape,
    /// Ctrl or Cmd together with a character key
    Command(char),
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    ClosedDialogs,
    OpenedCreate,
    FocusSearch,
    Ignored,
}

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error("Question and answer are required")]
    Validation,
    #[error("No dialog is open for this action")]
    NoDialog,
    #[error("FAQ {0} is not loaded")]
    UnknownFaq(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

pub struct FaqController<B: FaqBackend> {
    backend: B,
    faqs: Vec<FaqRecord>,
    search: String,
    expanded: HashSet<String>,
    dialog: Dialog,
    form: FaqForm,
    banner: Option<Banner>,
    search_focused: bool,
}

impl<B: FaqBackend> FaqController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            faqs: Vec::new(),
            search: String::new(),
            expanded: HashSet::new(),
            dialog: Dialog::Closed,
            form: FaqForm::default(),
            banner: None,
            search_focused: false,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Replaces the snapshot with the server's current collection.
    pub async fn load(&mut self) -> Result<(), ControllerError> {
        match self.backend.list().await {
            Ok(faqs) => {
                debug!(count = faqs.len(), "Loaded FAQ snapshot");
                self.expanded.retain(|id| faqs.iter().any(|f| &f.id == id));
                self.faqs = faqs;
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "Failed to load FAQs");
                self.show_error(format!("Could not load FAQs: {}", e.user_message()));
                Err(e.into())
            }
        }
    }

    pub fn faqs(&self) -> &[FaqRecord] {
        &self.faqs
    }

    /// The snapshot filtered by the current search term.
    pub fn visible(&self) -> Vec<&FaqRecord> {
        filter_faqs(&self.faqs, &self.search)
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn is_search_focused(&self) -> bool {
        self.search_focused
    }

    /// Flips the accordion row and returns whether it is now expanded.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    pub fn form(&self) -> &FaqForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FaqForm {
        &mut self.form
    }

    pub fn open_create(&mut self) {
        self.form = FaqForm::default();
        self.dialog = Dialog::Create;
        self.search_focused = false;
    }

    /// Opens the shared form pre-filled from the cached record.
    pub fn open_edit(&mut self, id: &str) -> Result<(), ControllerError> {
        let faq = self.find(id)?;
        self.form = FaqForm {
            question: faq.question.clone(),
            answer: faq.answer.clone(),
        };
        self.dialog = Dialog::Edit(id.to_string());
        self.search_focused = false;
        Ok(())
    }

    /// Closes any dialog and drops search focus.
    pub fn close_dialogs(&mut self) {
        self.dialog = Dialog::Closed;
        self.form = FaqForm::default();
        self.search_focused = false;
    }

    /// Submits the form as a create or an update depending on the dialog mode.
    pub async fn submit(&mut self) -> Result<FaqRecord, ControllerError> {
        let input = match self.form.to_input() {
            Some(input) => input,
            None => {
                self.show_error(ControllerError::Validation.to_string());
                return Err(ControllerError::Validation);
            }
        };

        let (result, success_message) = match self.dialog.clone() {
            Dialog::Create => (self.backend.create(&input).await, "FAQ added"),
            Dialog::Edit(id) => (self.backend.update(&id, &input).await, "FAQ updated"),
            Dialog::Closed | Dialog::ConfirmDelete(_) => return Err(ControllerError::NoDialog),
        };

        let faq = self.finish_mutation(result, success_message).await?;
        self.close_dialogs();
        Ok(faq)
    }

    /// First step of deletion: asks for confirmation.
    pub fn request_delete(&mut self, id: &str) -> Result<&FaqRecord, ControllerError> {
        self.find(id)?;
        self.dialog = Dialog::ConfirmDelete(id.to_string());
        self.find(id)
    }

    pub async fn confirm_delete(&mut self) -> Result<FaqRecord, ControllerError> {
        let id = match &self.dialog {
            Dialog::ConfirmDelete(id) => id.clone(),
            _ => return Err(ControllerError::NoDialog),
        };
        self.dialog = Dialog::Closed;

        let result = self.backend.delete(&id).await;
        self.finish_mutation(result, "FAQ deleted").await
    }

    pub fn handle_key(&mut self, key: KeyPress) -> KeyAction {
        match key {
            KeyPress::Escape => {
                if self.dialog == Dialog::Closed {
                    KeyAction::Ignored
                } else {
                    self.close_dialogs();
                    KeyAction::ClosedDialogs
                }
            }
            KeyPress::Command('n') => {
                self.open_create();
                KeyAction::OpenedCreate
            }
            KeyPress::Command('f') => {
                self.search_focused = true;
                KeyAction::FocusSearch
            }
            KeyPress::Command(_) | KeyPress::Other => KeyAction::Ignored,
        }
    }

    /// The current banner, or `None` once it has auto-expired.
    pub fn banner(&self) -> Option<&Banner> {
        self.banner_at(Instant::now())
    }

    pub fn banner_at(&self, now: Instant) -> Option<&Banner> {
        self.banner.as_ref().filter(|b| !b.is_expired_at(now))
    }

    pub fn dismiss_banner(&mut self) {
        self.banner = None;
    }

    async fn finish_mutation(
        &mut self,
        result: Result<FaqRecord, ApiError>,
        success_message: &str,
    ) -> Result<FaqRecord, ControllerError> {
        match result {
            Ok(faq) => {
                // A failed reload sets its own error banner
                if self.load().await.is_ok() {
                    self.banner = Some(Banner::new(BannerKind::Success, success_message));
                }
                Ok(faq)
            }
            Err(e) => {
                self.show_error(e.user_message());
                Err(e.into())
            }
        }
    }

    fn find(&self, id: &str) -> Result<&FaqRecord, ControllerError> {
        self.faqs
            .iter()
            .find(|f| f.id == id)
            .ok_or_else(|| ControllerError::UnknownFaq(id.to_string()))
    }

    fn show_error(&mut self, message: String) {
        self.banner = Some(Banner::new(BannerKind::Error, message));
    }
}
