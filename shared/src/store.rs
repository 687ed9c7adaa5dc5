//! # Store
//!
//! Root application state and the pure reducer that drives it.
//!
//! ## Slices:
//! - `modal` - the single modal slot, never persisted
//! - `notice` - outcome banner for the last user action, never persisted
//! - `preferences` - user preferences, persisted under [`PERSIST_KEY`]
//!
//! The UI layer owns the container; this module only defines how state moves.

use serde::{Deserialize, Serialize};

use crate::modal::{ModalKind, ModalState};

/// `localStorage` key for persisted slices
pub const PERSIST_KEY: &str = "persist:root";

/// Bumped whenever the persisted shape changes incompatibly
pub const PERSIST_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Uk,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Uk];

    /// BCP 47 code, as used in the `lang` attribute
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Uk => "uk",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Uk => "UA",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|language| language.code() == code)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// User-visible outcome of an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    OpenModal(ModalKind),
    CloseModal,
    /// Close the modal only if it is still the one opened under this id
    CloseModalIf(u64),
    ShowNotice(Notice),
    DismissNotice,
    SetLanguage(Language),
    /// Back to initial state, persisted slices included
    Reset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootState {
    pub modal: ModalState,
    pub notice: Option<Notice>,
    pub preferences: Preferences,
}

impl RootState {
    /// Initial state, rehydrated from a persisted snapshot when there is one
    pub fn init(persisted: Option<PersistedState>) -> Self {
        Self {
            preferences: persisted.map(|p| p.preferences).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::OpenModal(kind) => self.modal.open(kind),
            Action::CloseModal => self.modal.close(),
            Action::CloseModalIf(id) => self.modal.close_if(id),
            Action::ShowNotice(notice) => self.notice = Some(notice),
            Action::DismissNotice => self.notice = None,
            Action::SetLanguage(language) => self.preferences.language = language,
            Action::Reset => return Self::default(),
        }
        self
    }

    /// Snapshot of the slices that survive a reload
    pub fn persisted(&self) -> PersistedState {
        PersistedState {
            version: PERSIST_VERSION,
            preferences: self.preferences.clone(),
        }
    }
}

/// Envelope written to `localStorage`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub version: u32,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    #[error("Malformed persisted state: {0}")]
    Malformed(String),
    #[error("Persisted state version {found} does not match {expected}")]
    VersionMismatch { found: u32, expected: u32 },
}

impl PersistedState {
    pub fn from_json(raw: &str) -> Result<Self, PersistError> {
        let state: PersistedState =
            serde_json::from_str(raw).map_err(|e| PersistError::Malformed(e.to_string()))?;
        if state.version != PERSIST_VERSION {
            return Err(PersistError::VersionMismatch {
                found: state.version,
                expected: PERSIST_VERSION,
            });
        }
        Ok(state)
    }

    pub fn to_json(&self) -> Result<String, PersistError> {
        serde_json::to_string(self).map_err(|e| PersistError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modal::ResetPasswordProps;

    fn reset_password_with(email: &str) -> ModalKind {
        ModalKind::ResetPassword(ResetPasswordProps {
            initial_email: email.to_string(),
        })
    }

    #[test]
    fn test_initial_state_is_closed() {
        let state = RootState::init(None);
        assert!(!state.modal.is_open());
        assert_eq!(state.notice, None);
        assert_eq!(state.preferences, Preferences::default());
    }

    #[test]
    fn test_open_keeps_props_unchanged() {
        let kind = reset_password_with("user@example.com");
        let state = RootState::default().apply(Action::OpenModal(kind.clone()));
        assert!(state.modal.is_open());
        assert_eq!(state.modal.current(), Some(&kind));
    }

    #[test]
    fn test_close_drops_kind_and_props() {
        let state = RootState::default()
            .apply(Action::OpenModal(reset_password_with("user@example.com")))
            .apply(Action::CloseModal);
        assert!(!state.modal.is_open());
        assert_eq!(state.modal.current(), None);
    }

    #[test]
    fn test_reopen_replaces_props() {
        let state = RootState::default()
            .apply(Action::OpenModal(reset_password_with("first@example.com")))
            .apply(Action::OpenModal(reset_password_with("second@example.com")));
        assert_eq!(state.modal.current(), Some(&reset_password_with("second@example.com")));
    }

    #[test]
    fn test_modal_actions_leave_other_slices_alone() {
        let before = RootState::default()
            .apply(Action::SetLanguage(Language::Uk))
            .apply(Action::ShowNotice(Notice::success("done")));
        let after = before
            .clone()
            .apply(Action::OpenModal(ModalKind::reset_password()))
            .apply(Action::CloseModal);
        assert!(!after.modal.is_open());
        assert_eq!(after.notice, before.notice);
        assert_eq!(after.preferences, before.preferences);
    }

    #[test]
    fn test_close_modal_if_only_closes_matching_modal() {
        let state = RootState::default().apply(Action::OpenModal(reset_password_with("a@example.com")));
        let first = state.modal.open_id().unwrap();

        let state = state
            .apply(Action::CloseModal)
            .apply(Action::OpenModal(reset_password_with("b@example.com")))
            .apply(Action::CloseModalIf(first));
        assert_eq!(state.modal.current(), Some(&reset_password_with("b@example.com")));

        let second = state.modal.open_id().unwrap();
        let state = state.apply(Action::CloseModalIf(second));
        assert!(!state.modal.is_open());
    }

    #[test]
    fn test_notice_show_and_dismiss() {
        let state = RootState::default().apply(Action::ShowNotice(Notice::error("nope")));
        assert_eq!(state.notice.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(state.apply(Action::DismissNotice).notice, None);
    }

    #[test]
    fn test_reset_returns_to_defaults() {
        let state = RootState::default()
            .apply(Action::SetLanguage(Language::Uk))
            .apply(Action::OpenModal(ModalKind::reset_password()))
            .apply(Action::ShowNotice(Notice::success("sent")))
            .apply(Action::Reset);
        assert_eq!(state, RootState::default());
    }

    #[test]
    fn test_persisted_roundtrip_rehydrates_preferences() {
        let state = RootState::default().apply(Action::SetLanguage(Language::Uk));
        let raw = state.persisted().to_json().unwrap();
        let restored = RootState::init(Some(PersistedState::from_json(&raw).unwrap()));
        assert_eq!(restored.preferences.language, Language::Uk);
        assert!(!restored.modal.is_open());
    }

    #[test]
    fn test_persisted_envelope_shape() {
        let raw = RootState::default().persisted().to_json().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json, serde_json::json!({ "version": 1, "preferences": { "language": "en" } }));
    }

    #[test]
    fn test_bad_persisted_state_is_rejected() {
        assert!(matches!(
            PersistedState::from_json("not json"),
            Err(PersistError::Malformed(_))
        ));
        assert_eq!(
            PersistedState::from_json(r#"{"version":7,"preferences":{"language":"en"}}"#),
            Err(PersistError::VersionMismatch {
                found: 7,
                expected: PERSIST_VERSION
            })
        );
    }

    #[test]
    fn test_language_codes() {
        assert_eq!(Language::from_code("uk"), Some(Language::Uk));
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::default().code(), "en");
    }
}
