//! # Modal Registry
//!
//! Every modal the application can show is a variant of [`ModalKind`], and
//! each variant carries its own typed props. The host renders with an
//! exhaustive `match`, so there is no way to open a modal nothing can render.
//!
//! String keys still exist for logging and for callers that only have a key
//! (deep links, dev tools); [`ModalKind::from_key`] reports unknown keys as an
//! error instead of producing an empty modal.

use serde::{Deserialize, Serialize};

use crate::store::Action;

/// Props for the reset-password modal
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordProps {
    /// Prefills the email field
    #[serde(default)]
    pub initial_email: String,
}

/// Every modal the host knows how to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "props", rename_all = "camelCase")]
pub enum ModalKind {
    ResetPassword(ResetPasswordProps),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModalError {
    #[error("Unknown modal type: {0}")]
    UnknownKind(String),
    #[error("Invalid props for modal {key}: {reason}")]
    InvalidProps { key: String, reason: String },
}

impl ModalKind {
    /// Keys of every registered modal
    pub const KEYS: &'static [&'static str] = &["resetPassword"];

    pub fn key(&self) -> &'static str {
        match self {
            ModalKind::ResetPassword(_) => "resetPassword",
        }
    }

    /// Resolve a string key plus untyped props into a registered modal.
    pub fn from_key(key: &str, props: serde_json::Value) -> Result<Self, ModalError> {
        if !Self::KEYS.contains(&key) {
            return Err(ModalError::UnknownKind(key.to_string()));
        }
        let props = if props.is_null() {
            serde_json::Value::Object(serde_json::Map::new())
        } else {
            props
        };

        serde_json::from_value(serde_json::json!({ "type": key, "props": props })).map_err(|e| {
            ModalError::InvalidProps {
                key: key.to_string(),
                reason: e.to_string(),
            }
        })
    }

    pub fn reset_password() -> Self {
        ModalKind::ResetPassword(ResetPasswordProps::default())
    }
}

/// Visibility of the single modal slot. A closed modal keeps no kind or props.
///
/// Every open gets a fresh id, so work started inside one modal can tell
/// whether that modal is still the one on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    current: Option<ModalKind>,
    id: u64,
}

impl ModalState {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// The open modal with the props it was opened with
    pub fn current(&self) -> Option<&ModalKind> {
        self.current.as_ref()
    }

    /// Id of the open modal
    pub fn open_id(&self) -> Option<u64> {
        self.current.as_ref().map(|_| self.id)
    }

    /// Show `kind`, replacing whatever was open, under a new id
    pub fn open(&mut self, kind: ModalKind) {
        self.id += 1;
        self.current = Some(kind);
    }

    pub fn close(&mut self) {
        self.current = None;
    }

    /// Close only if the modal with `id` is still the open one
    pub fn close_if(&mut self, id: u64) {
        if self.open_id() == Some(id) {
            self.close();
        }
    }
}

/// Where a dismiss gesture on the modal overlay came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    Backdrop,
    CloseButton,
    EscapeKey,
    /// A click that landed inside the modal body
    Content,
}

/// Action a dismiss gesture produces. Clicks inside the body do nothing.
pub fn dismiss_action(trigger: DismissTrigger) -> Option<Action> {
    match trigger {
        DismissTrigger::Backdrop | DismissTrigger::CloseButton | DismissTrigger::EscapeKey => {
            Some(Action::CloseModal)
        }
        DismissTrigger::Content => None,
    }
}
