#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use regex::Regex;

use crate::net::types::SignInResponse;

/// Phase of a single sign-in attempt.
///
/// One attempt runs `Editing -> Submitting -> {Success | Failed}`; the next
/// edit returns a settled machine to `Editing`. Submits received outside
/// `Editing` are rejected, so a second click while a call is in flight
/// cannot start a duplicate request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Success,
    Failed,
}

/// Form input for one attempt. Discarded after every submit, either outcome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub remember: bool,
}

/// Field-scoped validation messages rendered inline next to each field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl FieldErrors {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

const PASSWORD_MIN: usize = 6;
const PASSWORD_MAX: usize = 50;

/// Syntactic local-part/domain check only; no DNS or MX lookup.
fn email_is_valid(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

/// Validate the form. Any message blocks submission; the network is never
/// touched while a field is invalid.
#[must_use]
pub fn validate(form: &SignInForm) -> FieldErrors {
    let email = if form.email.is_empty() {
        Some("Email is required")
    } else if email_is_valid(&form.email) {
        None
    } else {
        Some("Email is invalid")
    };

    let password_len = form.password.chars().count();
    let password = if form.password.is_empty() {
        Some("Password is required")
    } else if password_len < PASSWORD_MIN {
        Some("Password must have at least 6 characters")
    } else if password_len > PASSWORD_MAX {
        Some("Password must have at most 50 characters")
    } else {
        None
    };

    FieldErrors { email, password }
}

/// One sign-in attempt as an explicit state machine.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInState {
    pub phase: Phase,
    pub form: SignInForm,
    pub errors: FieldErrors,
}

impl SignInState {
    /// Note a field edit. A settled machine returns to `Editing`; an
    /// in-flight one is left alone.
    pub fn edit(&mut self) {
        if matches!(self.phase, Phase::Success | Phase::Failed) {
            self.phase = Phase::Editing;
        }
    }

    /// Try to start a submission.
    ///
    /// Outside `Editing` the submit is rejected outright. In `Editing`,
    /// validation failures record inline errors and keep the machine
    /// editable. Otherwise the machine moves to `Submitting` and the
    /// caller gets the input to send.
    pub fn try_submit(&mut self) -> Option<SignInForm> {
        if self.phase != Phase::Editing {
            return None;
        }

        self.errors = validate(&self.form);
        if !self.errors.is_clean() {
            return None;
        }

        self.phase = Phase::Submitting;
        Some(self.form.clone())
    }

    /// Settle the attempt with the authenticator's verdict. The typed
    /// input is discarded unconditionally.
    pub fn settle(&mut self, success: bool) {
        self.phase = if success { Phase::Success } else { Phase::Failed };
        self.form = SignInForm::default();
    }
}

/// Where a freshly issued token is persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenScope {
    /// `localStorage` — survives browser restarts. Chosen by "remember me".
    Durable,
    /// `sessionStorage` — dropped when the session ends.
    Ephemeral,
}

/// Everything a successful response grants: the token, where to keep it,
/// and the identity to publish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub scope: TokenScope,
    pub email: String,
    pub role: String,
}

/// Branch decision over an authenticator response.
///
/// Status 200 is the sole success sentinel. Every other status — including
/// transport failures, which the net layer maps to status 0 — lands in
/// `Rejected`; the specific reason is not surfaced to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Granted(SessionGrant),
    Rejected,
}

impl Outcome {
    #[must_use]
    pub fn from_response(response: &SignInResponse, remember: bool) -> Self {
        if response.status != 200 {
            return Self::Rejected;
        }

        Self::Granted(SessionGrant {
            token: response.token.clone().unwrap_or_default(),
            scope: if remember {
                TokenScope::Durable
            } else {
                TokenScope::Ephemeral
            },
            email: response.email.clone().unwrap_or_default(),
            role: response.role.clone().unwrap_or_default(),
        })
    }
}
