//! The single boundary to browser storage. Every persisted value goes
//! through here: typed, versioned where it matters, and corrupt payloads
//! are discarded silently instead of surfacing as crashes.

use gloo_storage::{LocalStorage, SessionStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::types::{PendingSearch, User};
use crate::wizard::{SavedWizardState, SCHEMA_VERSION};

pub mod keys {
    pub const AUTH_TOKEN: &str = "authToken";
    pub const CURRENT_USER: &str = "currentUser";
    pub const PENDING_SEARCH: &str = "pendingServiceSearch";
    pub const WIZARD_FORM: &str = "providerSignupFormState";
    pub const WIZARD_STEP: &str = "providerSignupCurrentStep";
    // Session-scoped
    pub const RETURN_URL: &str = "returnUrl";
    pub const POST_LOGIN_ACTION: &str = "postLoginAction";
}

fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    LocalStorage::get(key).ok()
}

fn save<T: Serialize>(key: &str, value: &T) {
    if let Err(err) = LocalStorage::set(key, value) {
        tracing::warn!("failed to persist {key}: {err}");
    }
}

fn remove(key: &str) {
    LocalStorage::delete(key);
}

// ---------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------

pub fn load_session() -> (Option<String>, Option<User>) {
    (load(keys::AUTH_TOKEN), load(keys::CURRENT_USER))
}

pub fn save_session(token: &str, user: &User) {
    save(keys::AUTH_TOKEN, &token);
    save(keys::CURRENT_USER, user);
}

/// Replace just the stored user record (account-type transitions)
pub fn save_user(user: &User) {
    save(keys::CURRENT_USER, user);
}

/// Clears every auth-related key, local and session scoped
pub fn clear_session() {
    remove(keys::AUTH_TOKEN);
    remove(keys::CURRENT_USER);
    remove(keys::RETURN_URL);
    SessionStorage::delete(keys::RETURN_URL);
    SessionStorage::delete(keys::POST_LOGIN_ACTION);
}

// ---------------------------------------------------------------------
// Pending provider search
// ---------------------------------------------------------------------

pub fn store_pending_search(search: &PendingSearch) {
    save(keys::PENDING_SEARCH, search);
}

/// Get-and-remove: a stored pending search can only ever replay once
pub fn take_pending_search() -> Option<PendingSearch> {
    let search = load(keys::PENDING_SEARCH);
    remove(keys::PENDING_SEARCH);
    search
}

pub fn clear_pending_search() {
    remove(keys::PENDING_SEARCH);
}

// ---------------------------------------------------------------------
// Wizard autosave
// ---------------------------------------------------------------------

/// Version gate for a persisted wizard payload; anything unparseable or
/// from another schema version is treated as absent
pub fn decode_wizard_state(json: &str) -> Option<SavedWizardState> {
    serde_json::from_str::<SavedWizardState>(json)
        .ok()
        .filter(|s| s.version == SCHEMA_VERSION)
}

pub fn save_wizard_state(state: &SavedWizardState) {
    match serde_json::to_string(state) {
        Ok(json) => {
            save(keys::WIZARD_FORM, &json);
            save(keys::WIZARD_STEP, &state.step);
        }
        Err(err) => tracing::warn!("failed to serialize wizard state: {err}"),
    }
}

pub fn load_wizard_state() -> Option<SavedWizardState> {
    let json: String = load(keys::WIZARD_FORM)?;
    let mut state = decode_wizard_state(&json)?;
    // The step key is written alongside the form; prefer it when present
    if let Some(step) = load::<u8>(keys::WIZARD_STEP) {
        state.step = step;
    }
    Some(state)
}

pub fn clear_wizard_state() {
    remove(keys::WIZARD_FORM);
    remove(keys::WIZARD_STEP);
}

// ---------------------------------------------------------------------
// Post-login intent (session scoped)
// ---------------------------------------------------------------------

pub fn set_return_url(url: &str) {
    if let Err(err) = SessionStorage::set(keys::RETURN_URL, url) {
        tracing::warn!("failed to store return url: {err}");
    }
}

pub fn take_return_url() -> Option<String> {
    let url: Option<String> = SessionStorage::get(keys::RETURN_URL).ok();
    SessionStorage::delete(keys::RETURN_URL);
    url
}

pub fn set_post_login_action(action: &str) {
    if let Err(err) = SessionStorage::set(keys::POST_LOGIN_ACTION, action) {
        tracing::warn!("failed to store post-login action: {err}");
    }
}

pub fn take_post_login_action() -> Option<String> {
    let action: Option<String> = SessionStorage::get(keys::POST_LOGIN_ACTION).ok();
    SessionStorage::delete(keys::POST_LOGIN_ACTION);
    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Wizard;

    #[test]
    fn decode_accepts_current_version() {
        let mut wizard = Wizard::new();
        wizard.form.business_name = "Acme".into();
        let json = serde_json::to_string(&wizard.snapshot()).unwrap();
        let decoded = decode_wizard_state(&json).unwrap();
        assert_eq!(decoded.business_name, "Acme");
    }

    #[test]
    fn decode_discards_corrupt_payloads() {
        assert!(decode_wizard_state("not json at all").is_none());
        assert!(decode_wizard_state("{\"step\": \"three\"}").is_none());
        assert!(decode_wizard_state("").is_none());
    }

    #[test]
    fn decode_discards_foreign_schema_versions() {
        let mut saved = Wizard::new().snapshot();
        saved.version = SCHEMA_VERSION + 1;
        let json = serde_json::to_string(&saved).unwrap();
        assert!(decode_wizard_state(&json).is_none());
    }
}
