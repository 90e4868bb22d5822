//! Catalog Loader Component
//!
//! Skeleton placeholder first, then the trending rows from /api/series.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::carousel::CarouselRow;
use crate::api;
use crate::models::Serie;
use crate::view_model::{chunk_rows, CATALOG_SYNOPSIS_CHARS};

const SKELETON_CARDS: usize = 6;

/// Catalog fetch outcome. A failed load renders the same empty view as a
/// genuinely empty catalog.
#[derive(Clone, PartialEq)]
enum CatalogState {
    Loading,
    Rows(Vec<Vec<Serie>>),
    Empty,
}

#[component]
pub fn CatalogLoader() -> impl IntoView {
    let (state, set_state) = signal(CatalogState::Loading);

    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_series().await {
                Ok(items) if !items.is_empty() => {
                    set_state.set(CatalogState::Rows(chunk_rows(items)))
                }
                Ok(_) => set_state.set(CatalogState::Empty),
                Err(err) => {
                    web_sys::console::error_1(&format!("Erreur chargement séries: {err}").into());
                    set_state.set(CatalogState::Empty);
                }
            }
        });
    });

    view! {
        {move || match state.get() {
            CatalogState::Loading => view! {
                <h2 id="seriesTitle">"Séries tendance"</h2>
                <div class="series-row">
                    <div class="series-list">
                        {(0..SKELETON_CARDS)
                            .map(|_| view! { <div class="series-card skeleton"></div> })
                            .collect_view()}
                    </div>
                </div>
            }
                .into_any(),
            CatalogState::Rows(rows) => view! {
                <h2 id="seriesTitle">"Séries tendance"</h2>
                {rows
                    .into_iter()
                    .map(|row| view! { <CarouselRow series=row synopsis_chars=CATALOG_SYNOPSIS_CHARS /> })
                    .collect_view()}
            }
                .into_any(),
            CatalogState::Empty => view! {
                <h2 id="seriesTitle">"Séries"</h2>
                <div class="search-results-grid empty">
                    <p>"Aucune série disponible."</p>
                </div>
            }
                .into_any(),
        }}
    }
}
