//! Global application state

use leptos::prelude::*;

use crate::matching::{SearchConstraints, SortKey};
use crate::storage;
use crate::types::{AuthResponse, DetectionResult, ProviderSummary, User};

/// Transient notification surfaced at the screen edge
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

/// Global application state
#[derive(Clone)]
pub struct AppState {
    /// Authentication token
    pub token: RwSignal<Option<String>>,
    /// Current user record
    pub user: RwSignal<Option<User>>,
    /// Category picked in the browse grid
    pub selected_category: RwSignal<Option<String>>,
    /// Session id correlating a detection with a later provider search
    pub session_id: RwSignal<Option<String>>,
    /// Detection result backing the current results view
    pub detection: RwSignal<Option<DetectionResult>>,
    /// Cached provider result set; replaced wholesale on every query
    pub providers: RwSignal<Vec<ProviderSummary>>,
    /// Current server-side filter predicates
    pub constraints: RwSignal<SearchConstraints>,
    /// Current client-side sort key
    pub sort_key: RwSignal<SortKey>,
    /// Active toast notification
    pub toast: RwSignal<Option<Toast>>,
    /// API base URL ("" = same origin)
    pub api_base: RwSignal<String>,
}

impl AppState {
    pub fn new() -> Self {
        let (token, user) = storage::load_session();

        Self {
            token: RwSignal::new(token),
            user: RwSignal::new(user),
            selected_category: RwSignal::new(None),
            session_id: RwSignal::new(None),
            detection: RwSignal::new(None),
            providers: RwSignal::new(vec![]),
            constraints: RwSignal::new(SearchConstraints::default()),
            sort_key: RwSignal::new(SortKey::default()),
            toast: RwSignal::new(None),
            api_base: RwSignal::new(String::new()),
        }
    }

    /// Authenticated iff both token and user are present
    pub fn is_authenticated(&self) -> bool {
        self.token.get_untracked().is_some() && self.user.get_untracked().is_some()
    }

    pub fn save_auth(&self, auth: &AuthResponse) {
        storage::save_session(&auth.access_token, &auth.user);
        self.token.set(Some(auth.access_token.clone()));
        self.user.set(Some(auth.user.clone()));
    }

    /// Replace the user record in memory and storage (account upgrades)
    pub fn set_user(&self, user: User) {
        storage::save_user(&user);
        self.user.set(Some(user));
    }

    /// Re-read storage into the signals
    pub fn refresh(&self) {
        let (token, user) = storage::load_session();
        self.token.set(token);
        self.user.set(user);
    }

    pub fn clear_auth(&self) {
        storage::clear_session();
        self.token.set(None);
        self.user.set(None);
    }

    pub fn toast_success(&self, text: impl Into<String>) {
        self.toast.set(Some(Toast { kind: ToastKind::Success, text: text.into() }));
    }

    pub fn toast_error(&self, text: impl Into<String>) {
        self.toast.set(Some(Toast { kind: ToastKind::Error, text: text.into() }));
    }

    pub fn toast_info(&self, text: impl Into<String>) {
        self.toast.set(Some(Toast { kind: ToastKind::Info, text: text.into() }));
    }

    pub fn toast_warning(&self, text: impl Into<String>) {
        self.toast.set(Some(Toast { kind: ToastKind::Warning, text: text.into() }));
    }

    pub fn clear_toast(&self) {
        self.toast.set(None);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
