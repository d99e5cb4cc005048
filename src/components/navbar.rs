//! Persistent navigation chrome shown above every protected page.

use leptos::prelude::*;

/// Top navigation bar for the protected area.
#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "Pantry"
            </a>
            <div class="navbar__links">
                <a class="navbar__link" href="/">
                    "Home"
                </a>
                <a class="navbar__link" href="/dashboard">
                    "Dashboard"
                </a>
            </div>
        </nav>
    }
}
