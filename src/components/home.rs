//! Home Page
//!
//! Hero, search, catalog and personal recommendations. The results area
//! starts on the catalog and is taken over by the first search.

use leptos::prelude::*;

use super::catalog::CatalogLoader;
use super::hero::HeroSlideshow;
use super::recommendations::PersonalRecommendations;
use super::search::{SearchBar, SearchResultsView};
use crate::page_data;
use crate::view_model::ResultsView;

#[component]
pub fn HomePage() -> impl IntoView {
    let (view, set_view) = signal(ResultsView::Catalog);
    let authenticated = page_data::is_authenticated();

    view! {
        <HeroSlideshow />
        <SearchBar set_view />
        <Show when=move || authenticated>
            <PersonalRecommendations />
        </Show>
        <div id="resultsContainer">
            {move || match view.get() {
                ResultsView::Catalog => view! { <CatalogLoader /> }.into_any(),
                ResultsView::SearchPending => ().into_any(),
                ResultsView::Search(results) => view! { <SearchResultsView results /> }.into_any(),
            }}
        </div>
    }
}
