//! List Membership Toggle Component
//!
//! "Ajouter à ma liste" button on the series detail page. The button
//! face only flips after the backend confirms the toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::error::ApiError;
use crate::models::ToggleAction;
use crate::page_data;
use crate::toast::{use_toasts, ToastKind};
use crate::view_model::list_button_face;

#[component]
pub fn ListToggleButton(serie_id: u32, initially_in_list: bool) -> impl IntoView {
    let toasts = use_toasts();
    let (in_list, set_in_list) = signal(initially_in_list);
    let (busy, set_busy) = signal(false);

    let on_click = move |_| {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            match api::toggle_list(serie_id).await {
                Ok(ToggleAction::Added) => {
                    set_in_list.set(true);
                    toasts.show("Ajoutée à votre liste !", ToastKind::Success);
                }
                Ok(ToggleAction::Removed) => {
                    set_in_list.set(false);
                    toasts.show("Série retirée de votre liste", ToastKind::Error);
                }
                Err(err) if err.requires_auth() => {
                    page_data::redirect("/login");
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("toggle list error: {err}").into());
                    let message = match &err {
                        ApiError::Rejected { .. } => err.user_message("Erreur inconnue."),
                        _ => "Erreur serveur.".to_string(),
                    };
                    toasts.show(message, ToastKind::Error);
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <button
            id="listBtn"
            class="list-btn"
            class:in-list=move || in_list.get()
            disabled=move || busy.get()
            on:click=on_click
        >
            {move || {
                let (icon, label) = list_button_face(in_list.get());
                view! {
                    <span class="icon">{icon}</span>
                    <span class="label">{label}</span>
                }
            }}
        </button>
    }
}
