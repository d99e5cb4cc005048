#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Signed-in identity published after a successful authentication.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    pub role: String,
}

/// Process-wide session state, provided via context from the root `App`.
///
/// `loading` is the shared busy flag toggled around the authentication
/// call; the sign-in page clears it on both outcomes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

impl SessionState {
    /// Role of the current identity, if a session is established.
    #[must_use]
    pub fn role(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.role.as_str())
    }
}
