use super::*;

// =============================================================
// SharedSecret policy
// =============================================================

#[test]
fn shared_secret_admits_exact_token() {
    assert!(SharedSecret.admit(Some(SESSION_TOKEN)));
}

#[test]
fn shared_secret_denies_absent_token() {
    assert!(!SharedSecret.admit(None));
}

#[test]
fn shared_secret_denies_empty_token() {
    assert!(!SharedSecret.admit(Some("")));
}

#[test]
fn shared_secret_denies_other_token() {
    assert!(!SharedSecret.admit(Some("some-other-token")));
}

#[test]
fn shared_secret_denies_prefixed_token() {
    let near_miss = format!("{SESSION_TOKEN}x");
    assert!(!SharedSecret.admit(Some(&near_miss)));
}

// =============================================================
// AdmissionPolicy seam
// =============================================================

struct AdmitNonEmpty;

impl AdmissionPolicy for AdmitNonEmpty {
    fn admit(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| !t.is_empty())
    }
}

#[test]
fn policy_is_swappable_behind_the_trait() {
    fn decide(policy: &dyn AdmissionPolicy, token: Option<&str>) -> bool {
        policy.admit(token)
    }

    assert!(decide(&AdmitNonEmpty, Some("anything")));
    assert!(!decide(&AdmitNonEmpty, Some("")));
    assert!(!decide(&SharedSecret, Some("anything")));
}
