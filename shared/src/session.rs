use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Where the session keeps its access token between page loads
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store that lives only as long as the value itself
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: RefCell<Option<String>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    fn save(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    fn clear(&self) {
        self.token.borrow_mut().take();
    }
}

/// Authentication state shared by the API client and the pages.
///
/// The session never navigates by itself: when the server answers 401 it
/// drops the token and calls the `on_unauthorized` hook it was built with.
#[derive(Clone)]
pub struct Session {
    store: Rc<dyn TokenStore>,
    auth_scheme: String,
    on_unauthorized: Rc<dyn Fn()>,
}

impl Session {
    pub fn new(store: Rc<dyn TokenStore>, on_unauthorized: impl Fn() + 'static) -> Self {
        Self {
            store,
            auth_scheme: "Bearer".to_string(),
            on_unauthorized: Rc::new(on_unauthorized),
        }
    }

    /// Override the scheme used in the `Authorization` header
    pub fn with_auth_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.auth_scheme = scheme.into();
        self
    }

    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    pub fn sign_in(&self, token: &str) {
        self.store.save(token);
    }

    pub fn sign_out(&self) {
        self.store.clear();
    }

    /// Value for the `Authorization` header, if signed in
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|token| format!("{} {}", self.auth_scheme, token))
    }

    /// Report a response status; returns true when it ended the session
    pub fn observe_status(&self, status: u16) -> bool {
        if status != 401 {
            return false;
        }

        tracing::info!("server rejected the access token, signing out");
        self.store.clear();
        (self.on_unauthorized)();
        true
    }
}

impl PartialEq for Session {
    fn eq(&self, other: &Self) -> bool {
        Rc::as_ptr(&self.store) as *const () == Rc::as_ptr(&other.store) as *const ()
            && Rc::as_ptr(&self.on_unauthorized) as *const () == Rc::as_ptr(&other.on_unauthorized) as *const ()
            && self.auth_scheme == other.auth_scheme
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("auth_scheme", &self.auth_scheme)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
