//! Login Page
//!
//! Splash overlay, then the login form posting JSON to /api/login.
//! Failures stay inline; only a confirmed login navigates away.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::SubmitEvent;

use crate::api;
use crate::error::ApiError;
use crate::page_data;

/// Splash screen hold time.
const SPLASH_MS: u64 = 2500;
const FALLBACK_ERROR: &str = "Nom d'utilisateur ou mot de passe incorrect.";
const NETWORK_ERROR: &str = "Erreur réseau. Réessaie plus tard.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let form_ref: NodeRef<html::Form> = NodeRef::new();
    let username_ref: NodeRef<html::Input> = NodeRef::new();
    let (splash_visible, set_splash_visible) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let reveal_form = move || {
        set_splash_visible.set(false);
        if let Some(input) = username_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    // The splash holds the page briefly; Escape skips it.
    spawn_local(async move {
        sleep(Duration::from_millis(SPLASH_MS)).await;
        reveal_form();
    });

    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let on_keydown =
            Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" && splash_visible.get_untracked() {
                    reveal_form();
                }
            });
        let _ = document
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        on_keydown.forget();
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::login(&form).await {
                Ok(()) => page_data::redirect("/"),
                Err(err) => {
                    web_sys::console::error_1(&format!("login error: {err}").into());
                    let message = match &err {
                        ApiError::Rejected { .. } => err.user_message(FALLBACK_ERROR),
                        _ => NETWORK_ERROR.to_string(),
                    };
                    set_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <div id="splash" class=move || if splash_visible.get() { "splash" } else { "splash hide" }>
            <h1 class="splash-logo">"SERIESTREAM"</h1>
        </div>
        <div
            id="loginWrap"
            class=move || if splash_visible.get() { "login-wrap" } else { "login-wrap visible" }
        >
            <h1>"Connexion"</h1>
            <form id="loginForm" node_ref=form_ref on:submit=on_submit>
                <input
                    id="username"
                    name="username"
                    type="text"
                    placeholder="Nom d'utilisateur"
                    node_ref=username_ref
                />
                <input id="password" name="password" type="password" placeholder="Mot de passe" />
                <button type="submit">"Se connecter"</button>
            </form>
            <div
                id="loginErrors"
                class="errors"
                style:display=move || if error.get().is_some() { "block" } else { "none" }
            >
                {move || error.get().unwrap_or_default()}
            </div>
            <p class="signup-hint">
                <a href="/signup">"Créer un compte"</a>
            </p>
        </div>
    }
}
