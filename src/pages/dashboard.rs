//! Dashboard page listing campaigns, with campaign creation for brands.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::campaign_card::CampaignCard;
use crate::components::name_prompt::NamePrompt;
use crate::net::types::Role;
use crate::state::campaigns::CampaignsState;
use crate::state::session::{SessionState, sign_out, use_session};
use crate::util::session_guard::install_unauth_redirect;

fn user_label(state: &SessionState) -> String {
    match &state.user {
        Some(user) => match user.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => user.email.clone(),
        },
        None => String::new(),
    }
}

fn is_brand(state: &SessionState) -> bool {
    state.user.as_ref().is_some_and(|user| user.role == Role::Brand)
}

/// Dashboard page — campaign feed plus the first-run name prompt.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let campaigns = expect_context::<RwSignal<CampaignsState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::state::campaigns::load_campaigns(campaigns).await;
    });

    let show_create = RwSignal::new(false);
    let on_cancel = Callback::new(move |_| show_create.set(false));

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Create4Me"</h1>
                <nav class="dashboard-page__nav">
                    <a href="/creators">"Creators"</a>
                    <span class="dashboard-page__user">{move || user_label(&session.get())}</span>
                    <button class="btn" on:click=move |_| sign_out(session)>
                        "Sign Out"
                    </button>
                </nav>
            </header>

            <Show when=move || is_brand(&session.get())>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Campaign"
                </button>
            </Show>

            <div class="dashboard-page__grid">
                {move || {
                    let state = campaigns.get();
                    if state.loading {
                        view! { <p>"Loading campaigns..."</p> }.into_any()
                    } else if let Some(message) = state.error {
                        view! { <p class="dashboard-page__error">{message}</p> }.into_any()
                    } else if state.items.is_empty() {
                        view! { <p>"No campaigns yet."</p> }.into_any()
                    } else {
                        let can_apply = !is_brand(&session.get());
                        view! {
                            <div class="dashboard-page__cards">
                                {state
                                    .items
                                    .into_iter()
                                    .map(|c| view! { <CampaignCard campaign=c can_apply=can_apply/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <Show when=move || show_create.get()>
                <CreateCampaignDialog on_cancel=on_cancel/>
            </Show>

            <NamePrompt/>
        </div>
    }
}

/// Modal dialog for publishing a new campaign.
#[component]
fn CreateCampaignDialog(on_cancel: Callback<()>) -> impl IntoView {
    let campaigns = expect_context::<RwSignal<CampaignsState>>();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let budget = RwSignal::new(String::new());

    let submit = Callback::new(move |_| {
        let title_value = title.get();
        let description_value = description.get();
        if title_value.trim().is_empty() || description_value.trim().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let draft = crate::net::types::NewCampaign {
                title: title_value.trim().to_owned(),
                description: description_value.trim().to_owned(),
                category: None,
                budget: budget.get().trim().parse::<f64>().ok(),
                requirements: None,
            };
            leptos::task::spawn_local(async move {
                let api = crate::net::api::ApiClient::new();
                if let Ok(campaign) = api.create_campaign(&draft).await {
                    campaigns.update(|s| s.upsert(campaign));
                    on_cancel.run(());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&campaigns, &budget);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Campaign"</h2>
                <label class="dialog__label">
                    "Title"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Budget (birr, optional)"
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || budget.get()
                        on:input=move |ev| budget.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Publish"
                    </button>
                </div>
            </div>
        </div>
    }
}
