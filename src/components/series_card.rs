//! Series Card Component

use leptos::prelude::*;

use crate::models::Serie;
use crate::view_model::truncate_synopsis;

/// Linked poster card with name and truncated synopsis overlay.
#[component]
pub fn SeriesCard(serie: Serie, synopsis_chars: usize) -> impl IntoView {
    let href = format!("/series/{}", serie.id);
    let image = serie.poster_url();
    let alt = format!("Affiche de {}", serie.name);
    let synopsis = truncate_synopsis(serie.synopsis.as_deref(), synopsis_chars);

    view! {
        <a href=href class="series-card">
            <div class="card-img-wrapper">
                <img src=image alt=alt />
            </div>
            <div class="series-overlay">
                <h3 class="series-name">{serie.name}</h3>
                <p class="synopsis">{synopsis}</p>
            </div>
        </a>
    }
}
