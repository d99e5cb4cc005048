//! Route guard for the protected area.
//!
//! Per navigation into any protected route, reads the credential token from
//! the durable store and asks the admission policy. Admitted requests get
//! the persistent navbar plus the matched child route; everything else is
//! redirected to `/sign-in` with the denied history entry replaced, so the
//! back button does not loop into the guard. No network calls, no store
//! writes.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::{Outlet, Redirect};

use crate::auth::{AdmissionPolicy, SharedSecret};
use crate::components::navbar::Navbar;
use crate::util::storage;

/// Layout wrapping every protected route.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    let token = storage::read_durable_token();

    if SharedSecret.admit(token.as_deref()) {
        view! {
            <Navbar/>
            <Outlet/>
        }
        .into_any()
    } else {
        let options = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        view! { <Redirect path="/sign-in" options=options/> }.into_any()
    }
}
