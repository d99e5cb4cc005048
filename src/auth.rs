//! Route admission policy.
//!
//! DESIGN
//! ======
//! Admission is a synchronous, side-effect-free decision over whatever token
//! the caller read from storage. The decision sits behind `AdmissionPolicy`
//! so the production rule (exact match against a fixed shared secret) can be
//! swapped for a verifiable-token rule without touching the guard layout.
//!
//! The shared-secret check is deliberate: any caller holding the constant is
//! admitted, there is no per-user validation. The real gate is the server,
//! which rejects API calls without a valid session.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Token value written on successful sign-in and expected by the guard.
pub const SESSION_TOKEN: &str = "pantry-4f1c29d8a6e34b58b0d7c2f9e81a5c63";

/// Decides whether a stored token admits the bearer to protected routes.
pub trait AdmissionPolicy {
    /// Returns `true` if the token grants access. Absent and mismatched
    /// tokens are both denials.
    fn admit(&self, token: Option<&str>) -> bool;
}

/// Production policy: exact equality against [`SESSION_TOKEN`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SharedSecret;

impl AdmissionPolicy for SharedSecret {
    fn admit(&self, token: Option<&str>) -> bool {
        token == Some(SESSION_TOKEN)
    }
}
