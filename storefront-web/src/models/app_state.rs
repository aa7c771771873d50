use yewdux::Store;

/// Session-wide state shared through yewdux.
#[derive(Default, Clone, PartialEq, Eq, Debug, Store)]
pub struct AppState {
    /// `false` until the stored session has been checked.
    pub session_checked: bool,
    pub token: Option<String>,
}

impl AppState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn signed_in(token: String) -> Self {
        Self {
            session_checked: true,
            token: Some(token),
        }
    }

    pub fn signed_out() -> Self {
        Self {
            session_checked: true,
            token: None,
        }
    }

    /// Records the outcome of the startup token check, unless the user has
    /// signed in or out while it was running.
    pub fn session_restored(&mut self, token: Option<String>) {
        if !self.session_checked {
            *self = token.map_or_else(Self::signed_out, Self::signed_in);
        }
    }
}
