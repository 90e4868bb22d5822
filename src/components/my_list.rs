//! My List Page
//!
//! Saved-series grid with modal-confirmed removal. The grid state lives
//! in a store; the empty-state swap keys off the entry count after a
//! removal completes, not off DOM children.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::error::ApiError;
use crate::models::Serie;
use crate::page_data;
use crate::toast::{use_toasts, ToastKind};
use crate::view_model::RemovalFlow;

/// Card fade duration before the entry leaves the grid.
const FADE_MS: u64 = 300;

/// One grid entry; `removing` drives the fade class.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub serie: Serie,
    pub removing: bool,
}

/// My-list page state with field-level reactivity.
#[derive(Debug, Clone, Default, Store)]
pub struct MyListState {
    pub entries: Vec<ListEntry>,
    pub flow: RemovalFlow,
}

#[component]
pub fn MyListPage() -> impl IntoView {
    let toasts = use_toasts();
    let store = Store::new(MyListState {
        entries: page_data::my_list_entries()
            .into_iter()
            .map(|serie| ListEntry {
                serie,
                removing: false,
            })
            .collect(),
        flow: RemovalFlow::default(),
    });

    let request_removal = move |serie_id: u32| store.flow().write().request(serie_id);
    let cancel = move |_| store.flow().write().cancel();

    let confirm = move |_| {
        let Some(serie_id) = store.flow().write().confirm() else {
            return;
        };
        spawn_local(async move {
            match api::toggle_list(serie_id).await {
                Ok(_) => {
                    store
                        .entries()
                        .write()
                        .iter_mut()
                        .filter(|entry| entry.serie.id == serie_id)
                        .for_each(|entry| entry.removing = true);
                    store.flow().write().finish();
                    toasts.show("Série retirée de votre liste", ToastKind::Success);

                    sleep(Duration::from_millis(FADE_MS)).await;
                    store
                        .entries()
                        .write()
                        .retain(|entry| entry.serie.id != serie_id);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("Erreur suppression: {err}").into());
                    let message = match &err {
                        ApiError::Rejected { .. } => "Erreur lors du retrait",
                        _ => "Erreur serveur",
                    };
                    toasts.show(message, ToastKind::Error);
                    store.flow().write().finish();
                }
            }
        });
    };

    view! {
        <h1>"Ma liste"</h1>
        <Show
            when=move || !store.entries().read().is_empty()
            fallback=|| view! {
                <p class="empty-msg">
                    "✨ Votre liste est vide. Ajoutez vos séries préférées depuis la page détail !"
                </p>
            }
        >
            <div class="mylist-grid">
                <For
                    each=move || store.entries().get()
                    key=|entry| entry.serie.id
                    children=move |entry| {
                        let serie_id = entry.serie.id;
                        let name = entry.serie.name.clone();
                        let image = entry.serie.poster_url();
                        let href = format!("/series/{serie_id}");
                        let removing = move || {
                            store
                                .entries()
                                .read()
                                .iter()
                                .find(|entry| entry.serie.id == serie_id)
                                .map(|entry| entry.removing)
                                .unwrap_or(false)
                        };
                        view! {
                            <div class="mylist-card" class:removing=removing>
                                <img src=image alt=name.clone() />
                                <div class="card-overlay">
                                    <h3>{name}</h3>
                                    <div class="card-actions">
                                        <a class="view-btn" href=href>"Voir"</a>
                                        <button
                                            class="remove-btn"
                                            on:click=move |_| request_removal(serie_id)
                                        >
                                            "Retirer"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
        <Show when=move || store.flow().read().modal_open()>
            <div id="confirm-modal" class="modal">
                <div class="modal-content">
                    <p>"Retirer cette série de votre liste ?"</p>
                    <div class="modal-actions">
                        <button id="confirm-btn" on:click=confirm>"Retirer"</button>
                        <button id="cancel-btn" on:click=cancel>"Annuler"</button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
