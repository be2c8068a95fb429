//! Persistent storage for the browser session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser keeps the bearer token and the display username in
//! `localStorage` under the same flat keys the original portal used, with
//! no namespacing or versioning. Native builds (unit tests) get an
//! in-memory stand-in so session logic stays testable off-browser.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::rc::Rc;

/// `localStorage` key holding the raw bearer token.
pub const TOKEN_KEY: &str = "token";
/// `localStorage` key holding the display username.
pub const USERNAME_KEY: &str = "username";

/// A persisted `(token, username)` pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredSession {
    pub token: String,
    pub username: String,
}

/// Key-value persistence for the session.
///
/// Storage being unavailable is not an error condition: reads come back
/// absent and writes are dropped.
pub trait TokenStore {
    fn save(&self, token: &str, username: &str);
    fn token(&self) -> Option<String>;
    fn username(&self) -> Option<String>;
    fn clear(&self);

    /// The full stored session, absent unless both keys are present.
    fn read(&self) -> Option<StoredSession> {
        match (self.token(), self.username()) {
            (Some(token), Some(username)) => Some(StoredSession { token, username }),
            _ => None,
        }
    }
}

/// Store backed by `window.localStorage`.
///
/// Every accessor degrades to absent/no-op when the window or storage is
/// unavailable (private-mode restrictions, non-browser builds).
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStore for BrowserTokenStore {
    fn save(&self, token: &str, username: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(TOKEN_KEY, token);
                let _ = storage.set_item(USERNAME_KEY, username);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, username);
        }
    }

    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn username(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage().and_then(|s| s.get_item(USERNAME_KEY).ok().flatten())
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn clear(&self) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(TOKEN_KEY);
                let _ = storage.remove_item(USERNAME_KEY);
            }
        }
    }
}

/// In-memory store used by unit tests and non-browser builds.
///
/// Clones share the same slots, mirroring how every `BrowserTokenStore`
/// handle sees the same `localStorage`.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slots: Rc<RefCell<(Option<String>, Option<String>)>>,
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str, username: &str) {
        *self.slots.borrow_mut() = (Some(token.to_owned()), Some(username.to_owned()));
    }

    fn token(&self) -> Option<String> {
        self.slots.borrow().0.clone()
    }

    fn username(&self) -> Option<String> {
        self.slots.borrow().1.clone()
    }

    fn clear(&self) {
        *self.slots.borrow_mut() = (None, None);
    }
}

/// Store wired to the build environment: browser storage under `csr`,
/// process-local memory otherwise.
pub fn shared_store() -> Rc<dyn TokenStore> {
    #[cfg(feature = "csr")]
    {
        Rc::new(BrowserTokenStore)
    }
    #[cfg(not(feature = "csr"))]
    {
        Rc::new(MemoryTokenStore::default())
    }
}
