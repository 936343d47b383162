//! Session state
//!
//! The service hands out an opaque session ID at login; every later call
//! except a few service-level lookups must carry it. A [`Session`] is owned
//! by exactly one client and lives as long as that client.

use std::fmt;

use core_kernel::JsonSerializable;
use serde_json::{json, Value};

use crate::error::RegistryError;

const VISIBLE_PREFIX_LEN: usize = 4;
const MIN_MASKABLE_LEN: usize = 8;

#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    user_key: String,
    session_id: Option<String>,
    logged_in: bool,
}

impl Session {
    pub fn new(user_key: impl Into<String>) -> Self {
        Self {
            user_key: user_key.into(),
            session_id: None,
            logged_in: false,
        }
    }

    pub fn user_key(&self) -> &str {
        &self.user_key
    }

    pub fn set_user_key(&mut self, user_key: impl Into<String>) {
        self.user_key = user_key.into();
    }

    /// The current session ID, `None` until login succeeds
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Starts a session; an empty ID leaves the session closed
    pub fn start(&mut self, session_id: impl Into<String>) {
        let session_id = session_id.into();
        if session_id.is_empty() {
            self.end();
        } else {
            self.session_id = Some(session_id);
            self.logged_in = true;
        }
    }

    pub fn end(&mut self) {
        self.session_id = None;
        self.logged_in = false;
    }

    /// Whether a session has been opened locally (not checked with the service)
    pub fn is_open(&self) -> bool {
        self.logged_in
    }

    /// The session ID, or `NotLoggedIn`
    pub fn require_session_id(&self) -> Result<&str, RegistryError> {
        self.session_id().ok_or(RegistryError::NotLoggedIn)
    }

    /// Session ID shortened for logs; IDs too short to abbreviate are hidden entirely
    pub fn masked_id(&self) -> String {
        match &self.session_id {
            Some(id) if id.chars().count() > MIN_MASKABLE_LEN => {
                let visible: String = id.chars().take(VISIBLE_PREFIX_LEN).collect();
                format!("{visible}***")
            }
            Some(_) => "***".to_string(),
            None => "<none>".to_string(),
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_key", &"***")
            .field("session_id", &self.masked_id())
            .field("logged_in", &self.logged_in)
            .finish()
    }
}

impl JsonSerializable for Session {
    fn json_serialize(&self) -> Value {
        json!({
            "sessionId": self.session_id,
            "loggedIn": self.logged_in,
        })
    }
}
