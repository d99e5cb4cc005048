//! Protected home page.

use leptos::prelude::*;

use crate::state::session::SessionState;

/// Home page shown after admission through the route guard.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session
            .get()
            .user
            .map_or_else(|| "Welcome back".to_owned(), |user| format!("Welcome back, {}", user.email))
    };

    view! {
        <div class="home-page">
            <h1>{greeting}</h1>
            <p>"Head over to the dashboard to get cooking."</p>
        </div>
    }
}
