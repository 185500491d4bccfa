use serde::{
    Deserialize,
    Serialize,
};

use crate::{
    core::User,
    persistence,
};

const SESSION_FILE: &str = "session.json";

/// What survives a restart: just the bearer token. The profile is re-fetched
/// on startup so a stale name or avatar never sticks around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoredCredentials {
    pub token: Option<String>,
}

/// Process-wide user context, initialized once at startup and torn down on
/// logout. Owned by the app and handed to widgets by reference, never
/// reachable as a global.
#[derive(Debug, Default)]
pub struct SessionStore {
    token: Option<String>,
    user: Option<User>,
}

impl SessionStore {
    /// Restore the persisted token, if any. The profile stays empty until
    /// the startup profile fetch completes.
    pub fn restore() -> Self {
        let creds = persistence::load_json_or_default::<StoredCredentials>(SESSION_FILE);
        Self { token: creds.token, user: None }
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn sign_in(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
    }

    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
    }

    /// Explicit teardown: forget the token and profile.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn persist(&self) {
        let creds = StoredCredentials { token: self.token.clone() };
        if let Err(e) = persistence::save_json(&creds, SESSION_FILE) {
            log::warn!("Failed to store credentials: {}", e);
        }
    }

    pub fn clear_persisted(&self) {
        if let Err(e) = persistence::delete_data_file(SESSION_FILE) {
            log::warn!("Failed to remove stored credentials: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Jordan".to_string(),
            email: "jordan@example.com".to_string(),
            profile_image_url: None,
        }
    }

    #[test]
    fn starts_signed_out() {
        let store = SessionStore::default();
        assert!(!store.is_signed_in());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
    }

    #[test]
    fn sign_in_exposes_token_and_profile() {
        let mut store = SessionStore::default();
        store.sign_in("tok".to_string(), test_user());

        assert!(store.is_signed_in());
        assert_eq!(store.token(), Some("tok"));
        assert_eq!(store.user().unwrap().name, "Jordan");
    }

    #[test]
    fn clear_forgets_everything() {
        let mut store = SessionStore::default();
        store.sign_in("tok".to_string(), test_user());
        store.clear();

        assert!(!store.is_signed_in());
        assert!(store.user().is_none());
    }
}
