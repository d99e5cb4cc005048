use super::*;

fn valid_form() -> SignInForm {
    SignInForm {
        email: "a@b.com".to_owned(),
        password: "secret1".to_owned(),
        remember: true,
    }
}

fn response_ok() -> SignInResponse {
    SignInResponse {
        status: 200,
        token: Some("T".to_owned()),
        email: Some("a@b.com".to_owned()),
        role: Some("user".to_owned()),
    }
}

// =============================================================
// Email validation
// =============================================================

#[test]
fn validate_empty_email_is_required() {
    let form = SignInForm {
        email: String::new(),
        ..valid_form()
    };
    assert_eq!(validate(&form).email, Some("Email is required"));
}

#[test]
fn validate_accepts_plain_address() {
    assert!(validate(&valid_form()).email.is_none());
}

#[test]
fn validate_accepts_subdomain_address() {
    let form = SignInForm {
        email: "cook@mail.pantry.example".to_owned(),
        ..valid_form()
    };
    assert!(validate(&form).email.is_none());
}

#[test]
fn validate_rejects_missing_at() {
    let form = SignInForm {
        email: "not-an-address".to_owned(),
        ..valid_form()
    };
    assert_eq!(validate(&form).email, Some("Email is invalid"));
}

#[test]
fn validate_rejects_missing_domain_dot() {
    let form = SignInForm {
        email: "a@localhost".to_owned(),
        ..valid_form()
    };
    assert_eq!(validate(&form).email, Some("Email is invalid"));
}

#[test]
fn validate_rejects_whitespace_in_address() {
    let form = SignInForm {
        email: "a b@c.com".to_owned(),
        ..valid_form()
    };
    assert_eq!(validate(&form).email, Some("Email is invalid"));
}

// =============================================================
// Password validation
// =============================================================

#[test]
fn validate_empty_password_is_required() {
    let form = SignInForm {
        password: String::new(),
        ..valid_form()
    };
    assert_eq!(validate(&form).password, Some("Password is required"));
}

#[test]
fn validate_rejects_five_char_password() {
    let form = SignInForm {
        password: "12345".to_owned(),
        ..valid_form()
    };
    assert_eq!(
        validate(&form).password,
        Some("Password must have at least 6 characters")
    );
}

#[test]
fn validate_accepts_six_char_password() {
    let form = SignInForm {
        password: "123456".to_owned(),
        ..valid_form()
    };
    assert!(validate(&form).password.is_none());
}

#[test]
fn validate_accepts_fifty_char_password() {
    let form = SignInForm {
        password: "x".repeat(50),
        ..valid_form()
    };
    assert!(validate(&form).password.is_none());
}

#[test]
fn validate_rejects_fifty_one_char_password() {
    let form = SignInForm {
        password: "x".repeat(51),
        ..valid_form()
    };
    assert_eq!(
        validate(&form).password,
        Some("Password must have at most 50 characters")
    );
}

#[test]
fn validate_reports_both_fields_at_once() {
    let form = SignInForm::default();
    let errors = validate(&form);
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.password, Some("Password is required"));
    assert!(!errors.is_clean());
}

// =============================================================
// State machine: submit
// =============================================================

#[test]
fn try_submit_moves_editing_to_submitting() {
    let mut state = SignInState {
        form: valid_form(),
        ..SignInState::default()
    };

    let input = state.try_submit();

    assert_eq!(input, Some(valid_form()));
    assert_eq!(state.phase, Phase::Submitting);
    assert!(state.errors.is_clean());
}

#[test]
fn try_submit_blocks_invalid_input() {
    let mut state = SignInState {
        form: SignInForm {
            email: "bad".to_owned(),
            password: "123".to_owned(),
            remember: false,
        },
        ..SignInState::default()
    };

    assert_eq!(state.try_submit(), None);
    assert_eq!(state.phase, Phase::Editing);
    assert_eq!(state.errors.email, Some("Email is invalid"));
    assert_eq!(
        state.errors.password,
        Some("Password must have at least 6 characters")
    );
}

#[test]
fn try_submit_rejected_while_in_flight() {
    let mut state = SignInState {
        form: valid_form(),
        ..SignInState::default()
    };
    state.try_submit();

    // Second click while the first call is pending.
    state.form = valid_form();
    assert_eq!(state.try_submit(), None);
    assert_eq!(state.phase, Phase::Submitting);
}

#[test]
fn try_submit_rejected_after_settling() {
    let mut state = SignInState::default();
    state.settle(false);
    assert_eq!(state.try_submit(), None);
    assert_eq!(state.phase, Phase::Failed);
}

// =============================================================
// State machine: settle and edit
// =============================================================

#[test]
fn settle_success_clears_input() {
    let mut state = SignInState {
        form: valid_form(),
        ..SignInState::default()
    };
    state.try_submit();
    state.settle(true);

    assert_eq!(state.phase, Phase::Success);
    assert_eq!(state.form, SignInForm::default());
}

#[test]
fn settle_failure_clears_input() {
    let mut state = SignInState {
        form: valid_form(),
        ..SignInState::default()
    };
    state.try_submit();
    state.settle(false);

    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.form, SignInForm::default());
}

#[test]
fn edit_returns_settled_machine_to_editing() {
    let mut state = SignInState::default();
    state.settle(false);
    state.edit();
    assert_eq!(state.phase, Phase::Editing);
}

#[test]
fn edit_does_not_interrupt_in_flight_attempt() {
    let mut state = SignInState {
        form: valid_form(),
        ..SignInState::default()
    };
    state.try_submit();
    state.edit();
    assert_eq!(state.phase, Phase::Submitting);
}

#[test]
fn settled_machine_accepts_a_fresh_attempt() {
    let mut state = SignInState::default();
    state.settle(false);
    state.edit();
    state.form = valid_form();
    assert!(state.try_submit().is_some());
}

// =============================================================
// Outcome::from_response
// =============================================================

#[test]
fn outcome_200_with_remember_targets_durable_store() {
    let outcome = Outcome::from_response(&response_ok(), true);
    assert_eq!(
        outcome,
        Outcome::Granted(SessionGrant {
            token: "T".to_owned(),
            scope: TokenScope::Durable,
            email: "a@b.com".to_owned(),
            role: "user".to_owned(),
        })
    );
}

#[test]
fn outcome_200_without_remember_targets_ephemeral_store() {
    let outcome = Outcome::from_response(&response_ok(), false);
    let Outcome::Granted(grant) = outcome else {
        panic!("expected a grant");
    };
    assert_eq!(grant.scope, TokenScope::Ephemeral);
}

#[test]
fn outcome_401_is_rejected() {
    let response = SignInResponse {
        status: 401,
        ..SignInResponse::default()
    };
    assert_eq!(Outcome::from_response(&response, true), Outcome::Rejected);
}

#[test]
fn outcome_transport_failure_is_rejected() {
    let response = SignInResponse::transport_failure();
    assert_eq!(Outcome::from_response(&response, true), Outcome::Rejected);
}

#[test]
fn outcome_500_is_rejected() {
    let response = SignInResponse {
        status: 500,
        ..SignInResponse::default()
    };
    assert_eq!(Outcome::from_response(&response, false), Outcome::Rejected);
}

#[test]
fn outcome_200_with_missing_fields_grants_empty_strings() {
    let response = SignInResponse {
        status: 200,
        ..SignInResponse::default()
    };
    let Outcome::Granted(grant) = Outcome::from_response(&response, true) else {
        panic!("expected a grant");
    };
    assert_eq!(grant.token, "");
    assert_eq!(grant.email, "");
    assert_eq!(grant.role, "");
}
