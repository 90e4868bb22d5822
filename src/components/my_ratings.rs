//! My Ratings Page
//!
//! Grid of the visitor's rated series from /api/my_ratings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::models::RatedSerie;
use crate::view_model::average_display;

const EMPTY_MESSAGE: &str = "Tu n'as encore noté aucune série.";
const LOAD_ERROR_MESSAGE: &str = "Impossible de charger vos notations.";
const NETWORK_ERROR_MESSAGE: &str = "Erreur réseau.";

#[derive(Clone, PartialEq)]
enum RatingsState {
    Loading,
    Loaded(Vec<RatedSerie>),
    Message(&'static str),
}

#[component]
pub fn MyRatingsPage() -> impl IntoView {
    let (state, set_state) = signal(RatingsState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::my_ratings().await {
                Ok(items) if items.is_empty() => {
                    set_state.set(RatingsState::Message(EMPTY_MESSAGE))
                }
                Ok(items) => set_state.set(RatingsState::Loaded(items)),
                Err(ApiError::Rejected { .. }) => {
                    set_state.set(RatingsState::Message(LOAD_ERROR_MESSAGE))
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("my ratings error: {err}").into());
                    set_state.set(RatingsState::Message(NETWORK_ERROR_MESSAGE));
                }
            }
        });
    });

    view! {
        <h1>"Mes notations"</h1>
        <div id="ratingsGrid" class="mylist-grid">
            {move || match state.get() {
                RatingsState::Loading => ().into_any(),
                RatingsState::Message(message) => {
                    view! { <p id="emptyMsg" class="empty-msg">{message}</p> }.into_any()
                }
                RatingsState::Loaded(items) => items
                    .into_iter()
                    .map(|item| {
                        let average = average_display(item.avg_rating);
                        view! {
                            <div class="mylist-card">
                                <img src=item.poster_url() alt=item.name.clone() />
                                <div class="card-overlay">
                                    <h3>{item.name.clone()}</h3>
                                    <p class="my-rating">
                                        "Ta note : "
                                        <strong>{format!("{}/5", item.user_rating)}</strong>
                                    </p>
                                    <p class="avg-rating">{format!("Moyenne : {average}/5")}</p>
                                    <div class="card-actions">
                                        <a class="view-btn" href=format!("/series/{}", item.id)>
                                            "Voir"
                                        </a>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}
