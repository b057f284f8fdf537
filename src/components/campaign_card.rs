//! Reusable card component for campaign list items.

#[cfg(test)]
#[path = "campaign_card_test.rs"]
mod campaign_card_test;

use leptos::prelude::*;

use crate::net::types::Campaign;
use crate::state::campaigns::CampaignsState;

fn likes_label(likes: i64) -> String {
    if likes == 1 {
        "1 like".to_owned()
    } else {
        format!("{likes} likes")
    }
}

fn budget_label(budget: Option<f64>) -> Option<String> {
    budget.map(|amount| format!("{amount:.0} birr"))
}

/// A campaign card with like, bookmark and apply actions.
#[component]
pub fn CampaignCard(campaign: Campaign, can_apply: bool) -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();

    let id = campaign.id.clone();
    let likes = RwSignal::new(campaign.likes);
    let bookmarked = RwSignal::new(false);
    let applied = RwSignal::new(false);

    let on_like = {
        let id = id.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::ApiClient::new();
                    if let Ok(state) = api.toggle_campaign_like(&id).await {
                        likes.set(state.likes);
                        campaigns.update(|s| s.set_likes(&id, state.likes));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&id, &campaigns);
        }
    };

    let on_bookmark = {
        let id = id.clone();
        move |_| {
            #[cfg(feature = "hydrate")]
            {
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::ApiClient::new();
                    if let Ok(state) = api.toggle_campaign_bookmark(&id).await {
                        bookmarked.set(state.bookmarked);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &id;
        }
    };

    let on_apply = {
        let id = id.clone();
        move |_| {
            if applied.get() {
                return;
            }
            #[cfg(feature = "hydrate")]
            {
                let id = id.clone();
                leptos::task::spawn_local(async move {
                    let api = crate::net::api::ApiClient::new();
                    if api.apply_to_campaign(&id, None).await.is_ok() {
                        applied.set(true);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &id;
        }
    };

    view! {
        <div class="campaign-card">
            <div class="campaign-card__header">
                <h3 class="campaign-card__title">{campaign.title}</h3>
                {campaign
                    .category
                    .map(|c| view! { <span class="campaign-card__category">{c}</span> })}
            </div>
            <p class="campaign-card__description">{campaign.description}</p>
            {budget_label(campaign.budget)
                .map(|b| view! { <p class="campaign-card__budget">{b}</p> })}
            <div class="campaign-card__actions">
                <button class="btn" on:click=on_like>
                    {move || likes_label(likes.get())}
                </button>
                <button class="btn" on:click=on_bookmark>
                    {move || if bookmarked.get() { "Bookmarked" } else { "Bookmark" }}
                </button>
                <Show when=move || can_apply>
                    <button class="btn btn--primary" on:click=on_apply.clone() disabled=move || applied.get()>
                        {move || if applied.get() { "Applied" } else { "Apply" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
