//! Signed-in user session

use super::{ListQuery, RecordStore};
use crate::core::{Error, Result, User};
use serde_json::json;

/// The user currently signed in, if any
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    current: Option<User>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign in by phone number, creating a profile on first use.
    ///
    /// `language` seeds the new profile's language preference; an existing
    /// profile keeps its own.
    pub fn login(&mut self, store: &RecordStore, phone_number: &str, language: &str) -> Result<&User> {
        let existing: Vec<User> =
            store.list_as(&ListQuery::new().filter("phoneNumber", phone_number).limit(1))?;

        let user = match existing.into_iter().next() {
            Some(user) => user,
            None => {
                log::info!("Creating profile for {}", phone_number);
                store.insert(&User::new(phone_number, language))?
            }
        };

        log::info!("Signed in as {}", user.id);
        Ok(&*self.current.insert(user))
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            log::info!("Signed out {}", user.id);
        }
    }

    /// Current user, if signed in
    pub fn me(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn require_user(&self) -> Result<&User> {
        self.current.as_ref().ok_or(Error::NotSignedIn)
    }

    /// Record a new language preference on the signed-in profile
    pub fn set_language_preference(&mut self, store: &RecordStore, code: &str) -> Result<&User> {
        let id = self.require_user()?.id.clone();
        let updated: User = store
            .update_as(&id, json!({ "languagePreference": code }))?
            .ok_or(Error::NotSignedIn)?;
        Ok(&*self.current.insert(updated))
    }
}
