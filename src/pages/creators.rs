//! Creator discovery page with search and connect actions.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::creator_card::CreatorCard;
use crate::state::creators::CreatorsState;
use crate::state::session::use_session;
use crate::util::session_guard::install_unauth_redirect;

/// Creator discovery — a search box over the creator directory.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn CreatorsPage() -> impl IntoView {
    let session = use_session();
    let creators = expect_context::<RwSignal<CreatorsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let search = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        let connections = expect_context::<RwSignal<crate::state::connections::ConnectionsState>>();
        leptos::task::spawn_local(async move {
            crate::state::creators::load_creators(creators, "").await;
        });
        leptos::task::spawn_local(async move {
            crate::state::connections::load_connections(connections).await;
        });
    }

    let on_search = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            let raw = search.get();
            leptos::task::spawn_local(async move {
                crate::state::creators::load_creators(creators, &raw).await;
            });
        }
    };

    view! {
        <div class="creators-page">
            <header class="creators-page__header">
                <a href="/">"Back to campaigns"</a>
                <h1>"Find Creators"</h1>
            </header>

            <form class="creators-page__search" on:submit=on_search>
                <input
                    class="creators-page__search-input"
                    type="search"
                    placeholder="Search by name, niche or platform"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Search"
                </button>
            </form>

            <div class="creators-page__grid">
                {move || {
                    let state = creators.get();
                    if state.loading {
                        view! { <p>"Searching..."</p> }.into_any()
                    } else if let Some(message) = state.error {
                        view! { <p class="creators-page__error">{message}</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <p>"No creators found."</p> }.into_any()
                    } else {
                        view! {
                            <div class="creators-page__cards">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|c| view! { <CreatorCard creator=c/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
