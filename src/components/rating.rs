//! Rating Widget Component
//!
//! Five-star rating on the series detail page. Stars only repaint after
//! a successful /api/rate response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::page_data;
use crate::toast::{use_toasts, ToastKind};
use crate::view_model::star_states;

#[component]
pub fn RatingStars(serie_name: String, initial_rating: u8) -> impl IntoView {
    let toasts = use_toasts();
    let (rating, set_rating) = signal(initial_rating);
    let name = StoredValue::new(serie_name);

    let submit = move |value: u8| {
        spawn_local(async move {
            let serie_name = name.get_value();
            match api::rate(&serie_name, value).await {
                Ok(()) => {
                    set_rating.set(value);
                    toasts.show("Votre note a bien été enregistrée !", ToastKind::Warning);
                }
                Err(err) if err.requires_auth() => {
                    page_data::redirect("/login");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("rating error: {err}").into());
                    let message = match &err {
                        ApiError::Rejected { .. } => {
                            err.user_message("Erreur lors de la notation.")
                        }
                        _ => "Erreur serveur.".to_string(),
                    };
                    toasts.show(message, ToastKind::Error);
                }
            }
        });
    };

    view! {
        <div id="rating" class="rating-stars">
            {(1u8..=5)
                .map(|value| {
                    let active = move || star_states(rating.get())[(value - 1) as usize];
                    view! {
                        <button class="star-btn" class:active=active on:click=move |_| submit(value)>
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
