//! Login page with email/password sign-in and brand/creator sign-up forms.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::net::types::Role;
use crate::state::session::use_session;

fn validate_sign_in_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

fn role_from_selection(raw: &str) -> Option<Role> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "brand" => Some(Role::Brand),
        "creator" => Some(Role::Creator),
        _ => None,
    }
}

fn validate_sign_up_input(
    email: &str,
    password: &str,
    role: &str,
) -> Result<(String, String, Role), &'static str> {
    let (email, password) = validate_sign_in_input(email, password)?;
    if password.len() < 6 {
        return Err("Password must be at least 6 characters.");
    }
    let role = role_from_selection(role).ok_or("Choose a brand or creator account.")?;
    Ok((email, password, role))
}

#[cfg(feature = "hydrate")]
fn go_home() {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let role = RwSignal::new("creator".to_owned());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_sign_in_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::session::sign_in(session, &email_value, &password_value).await {
                Ok(_) => go_home(),
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = session;
            let _ = (email_value, password_value);
        }
    };

    let on_sign_up = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value, role_value) =
            match validate_sign_up_input(&email.get(), &password.get(), &role.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::state::session::sign_up(session, &email_value, &password_value, role_value).await {
                Ok(_) => go_home(),
                Err(message) => {
                    info.set(message);
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (email_value, password_value, role_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Create4Me"</h1>
                <p class="login-card__subtitle">"Sign in"</p>
                <form class="login-form" on:submit=on_sign_in>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <div class="login-divider"></div>
                <p class="login-card__subtitle">"New here? Create an account"</p>
                <form class="login-form" on:submit=on_sign_up>
                    <select
                        class="login-input"
                        prop:value=move || role.get()
                        on:change=move |ev| role.set(event_target_value(&ev))
                    >
                        <option value="creator">"I am a creator"</option>
                        <option value="brand">"I am a brand"</option>
                    </select>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
