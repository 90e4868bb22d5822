//! Series Detail Page
//!
//! List toggle, star rating, synopsis and the similar-series rail. The
//! series identity comes from the page markup; only the id is in the
//! URL.

use leptos::prelude::*;

use super::list_toggle::ListToggleButton;
use super::rating::RatingStars;
use super::similar::SimilarSeries;
use super::synopsis::SynopsisBlock;
use crate::page_data;

#[component]
pub fn SeriesDetailPage(serie_id: u32) -> impl IntoView {
    let data = page_data::serie_page_data();

    let detail = data.map(|data| {
        let heading = data.name.clone();
        view! {
            <h1>{heading}</h1>
            <SynopsisBlock text=data.synopsis />
            <div class="serie-actions">
                <ListToggleButton serie_id initially_in_list=data.in_list />
                <RatingStars serie_name=data.name initial_rating=data.user_rating />
            </div>
        }
    });

    view! {
        <section class="serie-detail">
            {detail}
            <section class="similar-section">
                <h2>"Séries similaires"</h2>
                <SimilarSeries serie_id />
            </section>
        </section>
    }
}
