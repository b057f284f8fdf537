//! One-time dialog asking a freshly registered user for a display name.
//!
//! Shown on the dashboard when the signed-in user has no name and has not
//! dismissed the prompt before. Dismissal is remembered in browser storage so
//! the prompt does not reappear on later visits.

#[cfg(test)]
#[path = "name_prompt_test.rs"]
mod name_prompt_test;

use leptos::prelude::*;

use crate::state::session::{SessionState, update_user_name, use_session};
use crate::util::storage;

pub fn should_show_name_prompt(state: &SessionState, skipped: bool) -> bool {
    if skipped || !state.is_authenticated() {
        return false;
    }
    state
        .user
        .as_ref()
        .is_some_and(|user| user.name.as_deref().is_none_or(str::is_empty))
}

/// Modal prompting for a display name, with a skip option.
#[component]
pub fn NamePrompt() -> impl IntoView {
    let session = use_session();
    let name = RwSignal::new(String::new());
    let dismissed = RwSignal::new(storage::name_prompt_skipped());

    let visible = move || !dismissed.get() && should_show_name_prompt(&session.get(), false);

    let on_save = move |_| {
        let value = name.get();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return;
        }
        if update_user_name(session, trimmed) {
            dismissed.set(true);
        }
    };

    let on_skip = move |_| {
        storage::set_name_prompt_skipped();
        dismissed.set(true);
    };

    view! {
        <Show when=visible>
            <div class="dialog-backdrop">
                <div class="dialog">
                    <h2>"What should we call you?"</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                    <div class="dialog__actions">
                        <button class="btn" on:click=on_skip>
                            "Skip"
                        </button>
                        <button class="btn btn--primary" on:click=on_save>
                            "Save"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
