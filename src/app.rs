//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::protected_layout::ProtectedLayout;
use crate::pages::{dashboard::DashboardPage, home::HomePage, sign_in::SignInPage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session context and sets up client-side routing.
/// Everything under the root `ParentRoute` is protected: `ProtectedLayout`
/// checks the stored credential token and either renders the navbar plus
/// the matched child route or redirects to `/sign-in`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/pantry-ui.css"/>
        <Title text="Pantry"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("sign-in") view=SignInPage/>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
