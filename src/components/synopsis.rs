//! Synopsis Block Component
//!
//! Detail-page synopsis with a "Voir plus" toggle once the text goes
//! past the expand threshold.

use leptos::prelude::*;

use crate::view_model::SYNOPSIS_EXPAND_THRESHOLD;

#[component]
pub fn SynopsisBlock(text: String) -> impl IntoView {
    let expandable = text.trim().chars().count() > SYNOPSIS_EXPAND_THRESHOLD;
    let (expanded, set_expanded) = signal(false);

    let wrapper_class = move || {
        if !expandable {
            "synopsis-block short"
        } else if expanded.get() {
            "synopsis-block expanded"
        } else {
            "synopsis-block"
        }
    };

    view! {
        <div class=wrapper_class>
            <p id="synopsis">{text}</p>
            <Show when=move || expandable>
                <button
                    id="expandSynopsis"
                    class="expand-hint"
                    on:click=move |_| set_expanded.update(|value| *value = !*value)
                >
                    {move || if expanded.get() { "Voir moins" } else { "Voir plus" }}
                </button>
            </Show>
        </div>
    }
}
