//! Search Components
//!
//! Single-flight search box plus the results grid.

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::KeyboardEvent;

use super::series_card::SeriesCard;
use crate::api;
use crate::models::SearchResults;
use crate::view_model::{search_heading, RequestSeq, ResultsView, CATALOG_SYNOPSIS_CHARS};

const DEFAULT_LABEL: &str = "Rechercher";
const LOADING_LABEL: &str = "Recherche...";

/// Search input and trigger. Writes the shared results view of the home
/// page.
#[component]
pub fn SearchBar(set_view: WriteSignal<ResultsView>) -> impl IntoView {
    let input_ref: NodeRef<html::Input> = NodeRef::new();
    let (searching, set_searching) = signal(false);
    let (seq, set_seq) = signal(RequestSeq::default());

    let perform_search = move || {
        // Single flight: triggers while a request is out are no-ops.
        if searching.get_untracked() {
            return;
        }
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let query = input.value().trim().to_string();
        if query.is_empty() {
            let _ = input.focus();
            return;
        }

        set_searching.set(true);
        set_view.set(ResultsView::SearchPending);
        let (next, token) = seq.get_untracked().next();
        set_seq.set(next);

        spawn_local(async move {
            let result = api::search(&query).await;
            // A completion that is no longer the latest dispatch must not
            // touch the view.
            if !seq.get_untracked().is_current(token) {
                return;
            }
            let results = match result {
                Ok(results) => results,
                Err(err) => {
                    web_sys::console::error_1(&format!("Erreur recherche: {err}").into());
                    SearchResults {
                        query,
                        count: 0,
                        results: Vec::new(),
                    }
                }
            };
            set_view.set(ResultsView::Search(results));
            set_searching.set(false);
        });
    };

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            perform_search();
        }
    };

    view! {
        <div class="search-box">
            <input
                id="search"
                type="text"
                placeholder="Rechercher une série..."
                node_ref=input_ref
                on:keydown=on_keydown
            />
            <button
                id="searchBtn"
                disabled=move || searching.get()
                on:click=move |_| perform_search()
            >
                {move || if searching.get() { LOADING_LABEL } else { DEFAULT_LABEL }}
            </button>
        </div>
    }
}

/// Finished-search rendering: card grid, or the explicit zero-result
/// view carrying the query.
#[component]
pub fn SearchResultsView(results: SearchResults) -> impl IntoView {
    let heading = search_heading(&results.query, results.count);

    if results.count == 0 {
        let message = format!("Aucun résultat trouvé pour « {} ».", results.query);
        view! {
            <h2 id="seriesTitle">{heading}</h2>
            <div class="search-results-grid empty">
                <p>{message}</p>
            </div>
        }
        .into_any()
    } else {
        view! {
            <h2 id="seriesTitle">{heading}</h2>
            <div class="search-results-grid">
                {results
                    .results
                    .into_iter()
                    .map(|serie| view! { <SeriesCard serie synopsis_chars=CATALOG_SYNOPSIS_CHARS /> })
                    .collect_view()}
            </div>
        }
        .into_any()
    }
}
