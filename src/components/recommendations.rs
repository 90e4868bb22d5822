//! Personal Recommendations Component
//!
//! Logged-in home section fed by /api/recommend_user. The section shows
//! up whatever the outcome; it is never left hidden.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::series_card::SeriesCard;
use crate::api;
use crate::models::Serie;
use crate::view_model::RECO_SYNOPSIS_CHARS;

const EMPTY_MESSAGE: &str =
    "Pas encore de recommandations. Note quelques séries pour en débloquer !";
const ERROR_MESSAGE: &str = "Impossible de charger tes recommandations pour le moment.";

#[derive(Clone, PartialEq)]
enum RecoState {
    Loading,
    Loaded(Vec<Serie>),
    /// Empty and failed loads share the section; only the message differs.
    Message(&'static str),
}

#[component]
pub fn PersonalRecommendations() -> impl IntoView {
    let (state, set_state) = signal(RecoState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::recommend_user().await {
                Ok(items) if items.is_empty() => set_state.set(RecoState::Message(EMPTY_MESSAGE)),
                Ok(items) => set_state.set(RecoState::Loaded(items)),
                Err(err) => {
                    web_sys::console::error_1(&format!("Erreur recommandations: {err}").into());
                    set_state.set(RecoState::Message(ERROR_MESSAGE));
                }
            }
        });
    });

    view! {
        <section
            id="personalRecommendations"
            hidden=move || matches!(state.get(), RecoState::Loading)
        >
            <h2>"Recommandé pour toi"</h2>
            <div id="personalList" class="series-list">
                {move || match state.get() {
                    RecoState::Loading => ().into_any(),
                    RecoState::Loaded(items) => items
                        .into_iter()
                        .map(|serie| view! { <SeriesCard serie synopsis_chars=RECO_SYNOPSIS_CHARS /> })
                        .collect_view()
                        .into_any(),
                    RecoState::Message(message) => {
                        view! { <p class="empty-reco">{message}</p> }.into_any()
                    }
                }}
            </div>
        </section>
    }
}
