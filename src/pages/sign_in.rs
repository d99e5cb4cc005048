//! Sign-in page driving the credential submission state machine.
//!
//! FLOW
//! ====
//! Input is validated locally before any network call. An accepted submit
//! moves the machine to `Submitting` and posts the credentials; the
//! response settles the attempt. Success persists the token (durable or
//! ephemeral, per the remember choice), publishes the session identity,
//! and navigates to the dashboard. Any other status shows one generic
//! error toast. The typed input is discarded after every attempt.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::SignInRequest;
use crate::state::session::{SessionState, SessionUser};
use crate::state::sign_in::{Outcome, Phase, SignInState};
use crate::util::storage;
use crate::util::toast::{self, Severity};

/// Sign-in page — labeled fields with inline validation errors, a
/// remember-me checkbox, and a submit button disabled while a call is in
/// flight. Redirects home if a session identity is already established.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let state = RwSignal::new(SignInState::default());
    let navigate = use_navigate();

    // Already signed in elsewhere: bounce home. The effect re-runs only on
    // session changes, not on every render, so reaching the target does
    // not loop.
    {
        let navigate = navigate.clone();
        Effect::new(move || {
            if session.get().role().is_some() {
                navigate("/", NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        // Rejects re-entrant submits and invalid input in one step.
        let Some(input) = state.try_update(SignInState::try_submit).flatten() else {
            return;
        };

        session.update(|s| s.loading = true);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let request = SignInRequest {
                email: input.email.clone(),
                password: input.password.clone(),
            };
            let response = api::sign_in(&request).await;

            match Outcome::from_response(&response, input.remember) {
                Outcome::Granted(grant) => {
                    storage::store_token(&grant.token, grant.scope);
                    session.update(|s| {
                        s.user = Some(SessionUser {
                            email: grant.email,
                            role: grant.role,
                        });
                        s.loading = false;
                    });
                    state.update(|s| s.settle(true));
                    navigate("/dashboard", NavigateOptions::default());
                    toast::show(Severity::Success, "Let's dig in", 1000);
                }
                Outcome::Rejected => {
                    session.update(|s| s.loading = false);
                    state.update(|s| s.settle(false));
                    toast::show(Severity::Error, "Your email or password incorrect!", 1000);
                }
            }
        });
    };

    let submitting = move || state.get().phase == Phase::Submitting;

    view! {
        <div class="sign-in-page">
            <div class="sign-in-page__card">
                <div class="sign-in-page__title">
                    <h1>"Sign In" <span class="sign-in-page__dot">"."</span></h1>
                    <p>"Welcome back my friend. Now please sign in to use this app."</p>
                </div>

                <form class="sign-in-page__form" on:submit=on_submit>
                    <label class="sign-in-page__label" for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        class="sign-in-page__input"
                        type="text"
                        placeholder="example@email.com"
                        prop:value=move || state.get().form.email
                        on:input=move |ev| {
                            state.update(|s| {
                                s.edit();
                                s.form.email = event_target_value(&ev);
                            });
                        }
                    />
                    {move || {
                        state.get().errors.email.map(|msg| view! { <p class="sign-in-page__field-error">{msg}</p> })
                    }}

                    <label class="sign-in-page__label" for="password">
                        "Password"
                    </label>
                    <input
                        id="password"
                        class="sign-in-page__input"
                        type="password"
                        placeholder="******"
                        prop:value=move || state.get().form.password
                        on:input=move |ev| {
                            state.update(|s| {
                                s.edit();
                                s.form.password = event_target_value(&ev);
                            });
                        }
                    />
                    {move || {
                        state.get().errors.password.map(|msg| view! { <p class="sign-in-page__field-error">{msg}</p> })
                    }}

                    <label class="sign-in-page__remember">
                        <input
                            type="checkbox"
                            prop:checked=move || state.get().form.remember
                            on:change=move |ev| {
                                state.update(|s| {
                                    s.edit();
                                    s.form.remember = event_target_checked(&ev);
                                });
                            }
                        />
                        "Remember me"
                    </label>

                    <button class="btn btn--primary sign-in-page__submit" type="submit" disabled=submitting>
                        {move || if submitting() { "Signing in..." } else { "Submit" }}
                    </button>
                </form>

                <div class="sign-in-page__footer">
                    <p>"Not have an account yet?"</p>
                    <a href="/sign-up">"Sign up"</a>
                </div>
            </div>
        </div>
    }
}
