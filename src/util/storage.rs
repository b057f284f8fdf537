//! Browser storage for the auth token and onboarding flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bearer token is the only persisted piece of session state. It lives
//! under a single `localStorage` key, read at startup and on every outgoing
//! request, written on sign-in and removed on sign-out or a failed restore.
//! Access goes through the `TokenStore` trait so session logic can run
//! against an in-memory store in native tests.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// `localStorage` key holding the opaque bearer token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// `localStorage` key marking the onboarding name prompt as dismissed.
pub const NAME_PROMPT_SKIPPED_KEY: &str = "namePromptSkipped";

/// Read/write/remove access to the persisted bearer token.
pub trait TokenStore {
    /// The stored token, if any.
    fn token(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn store(&self, token: &str);
    /// Remove the stored token.
    fn clear(&self);
}

/// `localStorage`-backed token store. Inert outside the browser: reads
/// return `None` and writes are dropped, so SSR and native tests never touch
/// storage through this type.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(AUTH_TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn store(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(AUTH_TOKEN_KEY, token);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(AUTH_TOKEN_KEY);
            }
        }
    }
}

/// In-memory token store for tests and dependency injection.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore(std::rc::Rc<std::cell::RefCell<Option<String>>>);

impl MemoryTokenStore {
    /// A store pre-populated with `token`.
    #[must_use]
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.store(token);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn token(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn store(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Whether the user dismissed the onboarding name prompt.
pub fn name_prompt_skipped() -> bool {
    #[cfg(feature = "hydrate")]
    {
        local_storage()
            .and_then(|s| s.get_item(NAME_PROMPT_SKIPPED_KEY).ok().flatten())
            .is_some()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mark the onboarding name prompt as dismissed.
pub fn set_name_prompt_skipped() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(NAME_PROMPT_SKIPPED_KEY, "true");
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}
