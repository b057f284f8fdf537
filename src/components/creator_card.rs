//! Reusable card component for creator discovery results.

#[cfg(test)]
#[path = "creator_card_test.rs"]
mod creator_card_test;

use leptos::prelude::*;

use crate::net::types::Creator;
use crate::state::connections::ConnectionsState;
use crate::state::creators::CreatorsState;

#[allow(clippy::cast_precision_loss)]
fn followers_label(followers: Option<i64>) -> String {
    match followers {
        Some(n) if n >= 1_000_000 => format!("{:.1}M followers", n as f64 / 1_000_000.0),
        Some(n) if n >= 1_000 => format!("{:.1}K followers", n as f64 / 1_000.0),
        Some(n) => format!("{n} followers"),
        None => "Followers not reported".to_owned(),
    }
}

fn platforms_label(platforms: &[String]) -> String {
    platforms.join(" / ")
}

/// A creator card with connect and like actions.
#[component]
pub fn CreatorCard(creator: Creator) -> impl IntoView {
    let creators = expect_context::<RwSignal<CreatorsState>>();
    let connections = expect_context::<RwSignal<ConnectionsState>>();

    let id = creator.id.clone();
    let user_id = creator.user_id.clone();
    let likes = RwSignal::new(creator.likes);
    let requested = RwSignal::new(connections.get_untracked().involves(&creator.user_id));

    let followers = followers_label(creator.followers);
    let platforms = if creator.platforms.is_empty() {
        None
    } else {
        Some(platforms_label(&creator.platforms))
    };

    let on_like = {
        let id = id.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::ApiClient::new();
                    if let Ok(state) = api.toggle_creator_like(&id).await {
                        likes.set(state.likes);
                        creators.update(|s| s.set_likes(&id, state.likes));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&id, &creators);
        }
    };

    let on_connect = move |_| {
        if requested.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let user_id = user_id.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::new();
                if let Ok(connection) = api.request_connection(&user_id).await {
                    requested.set(true);
                    connections.update(|s| s.upsert(connection));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&user_id, &connections);
    };

    view! {
        <div class="creator-card">
            <div class="creator-card__header">
                {creator
                    .avatar_url
                    .map(|url| view! { <img class="creator-card__avatar" src=url alt=""/> })}
                <h3 class="creator-card__name">{creator.name}</h3>
                {creator
                    .niche
                    .map(|n| view! { <span class="creator-card__niche">{n}</span> })}
            </div>
            {creator.bio.map(|bio| view! { <p class="creator-card__bio">{bio}</p> })}
            <p class="creator-card__followers">{followers}</p>
            {platforms.map(|p| view! { <p class="creator-card__platforms">{p}</p> })}
            <div class="creator-card__actions">
                <button class="btn" on:click=on_like>
                    {move || format!("{} likes", likes.get())}
                </button>
                <button class="btn btn--primary" on:click=on_connect disabled=move || requested.get()>
                    {move || if requested.get() { "Requested" } else { "Connect" }}
                </button>
            </div>
        </div>
    }
}
