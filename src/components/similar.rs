//! Similar Series Component
//!
//! Detail-page rail fed by /api/similar/{id}.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Serie;

#[derive(Clone, PartialEq)]
enum SimilarState {
    Loading,
    Loaded(Vec<Serie>),
    Empty,
    Failed,
}

#[component]
pub fn SimilarSeries(serie_id: u32) -> impl IntoView {
    let (state, set_state) = signal(SimilarState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::similar(serie_id).await {
                Ok(items) if items.is_empty() => set_state.set(SimilarState::Empty),
                Ok(items) => set_state.set(SimilarState::Loaded(items)),
                Err(err) => {
                    web_sys::console::error_1(&format!("similar fetch failed: {err}").into());
                    set_state.set(SimilarState::Failed);
                }
            }
        });
    });

    view! {
        <div id="similarContainer">
            {move || match state.get() {
                SimilarState::Loading => {
                    view! { <p class="loading-similar">"Chargement…"</p> }.into_any()
                }
                SimilarState::Empty => {
                    view! { <p class="no-similar">"Aucune série similaire trouvée."</p> }.into_any()
                }
                SimilarState::Failed => view! {
                    <p class="no-similar">"Erreur de chargement des séries similaires."</p>
                }
                    .into_any(),
                SimilarState::Loaded(items) => items
                    .into_iter()
                    .map(|serie| {
                        let href = format!("/series/{}", serie.id);
                        view! {
                            <a class="series-card fade-in" href=href>
                                <img src=serie.poster_url() alt=serie.name.clone() />
                                <div class="series-overlay">
                                    <h3 class="series-name">{serie.name}</h3>
                                </div>
                            </a>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
