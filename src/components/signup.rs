//! Signup Page
//!
//! Registration form posting JSON to /api/signup; the API logs the new
//! account in, so success goes straight to the home page.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::SubmitEvent;

use crate::api;
use crate::error::ApiError;
use crate::page_data;

const FALLBACK_ERROR: &str = "Erreur lors de l'inscription.";
const NETWORK_ERROR: &str = "Erreur réseau. Réessaie plus tard.";

#[component]
pub fn SignupPage() -> impl IntoView {
    let form_ref: NodeRef<html::Form> = NodeRef::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(form) = form_ref.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::signup(&form).await {
                Ok(()) => page_data::redirect("/"),
                Err(err) => {
                    web_sys::console::error_1(&format!("signup error: {err}").into());
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
        <div class="signup-wrap">
            <h1>"Inscription"</h1>
            <form id="signupForm" node_ref=form_ref on:submit=on_submit>
                <input name="username" type="text" placeholder="Nom d'utilisateur" />
                <input name="email" type="email" placeholder="Adresse e-mail" />
                <input name="password" type="password" placeholder="Mot de passe" />
                <button type="submit">"Créer mon compte"</button>
            </form>
            <div
                class="errors"
                style:display=move || if error.get().is_some() { "block" } else { "none" }
            >
                {move || error.get().unwrap_or_default()}
            </div>
            <p class="login-hint">
                <a href="/login">"Déjà un compte ? Se connecter"</a>
            </p>
        </div>
    }
}
