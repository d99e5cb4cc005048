#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Credential payload sent to the authenticator.
///
/// The remember choice is not part of the wire contract; it only selects
/// the storage scope client-side.
#[derive(Clone, Debug, serde::Serialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// JSON body returned by the sign-in endpoint. Every field is optional so
/// error bodies and partial responses decode without failing.
#[derive(Clone, Debug, Default, serde::Deserialize)]
pub struct SignInBody {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Authenticator verdict: the HTTP status plus whatever the body carried.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInResponse {
    pub status: u16,
    pub token: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl SignInResponse {
    /// Verdict for attempts that never produced an HTTP status (request
    /// build or transport failure). Status 0 is never the success sentinel,
    /// so these land in the same rejection branch as a denied login.
    #[must_use]
    pub fn transport_failure() -> Self {
        Self::default()
    }
}
