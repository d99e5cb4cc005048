//! Protected dashboard page.

use leptos::prelude::*;

/// Dashboard landing page, the navigation target after a successful
/// sign-in.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <p>"Your pantry at a glance."</p>
        </div>
    }
}
