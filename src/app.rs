//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{creators::CreatorsPage, dashboard::DashboardPage, login::LoginPage};
use crate::state::campaigns::CampaignsState;
use crate::state::connections::ConnectionsState;
use crate::state::creators::CreatorsState;
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
/// Provides all shared state contexts, restores any persisted session,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components. The session
    // starts in its booting state so guarded pages wait for the restore
    // attempt instead of redirecting immediately.
    let session = RwSignal::new(SessionState::booting());
    let campaigns = RwSignal::new(CampaignsState::default());
    let creators = RwSignal::new(CreatorsState::default());
    let connections = RwSignal::new(ConnectionsState::default());

    provide_context(session);
    provide_context(campaigns);
    provide_context(creators);
    provide_context(connections);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::session::restore_session(session).await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/create4me.css"/>
        <Title text="Create4Me"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("creators") view=CreatorsPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
