//! Carousel Row Component
//!
//! Horizontal series row with arrow, wheel and drag scrolling. Each
//! rendered row owns its listeners and drag state; nothing is shared
//! across rows.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{MouseEvent, ScrollBehavior, ScrollToOptions, WheelEvent};

use super::series_card::SeriesCard;
use crate::models::Serie;

/// Arrow click scroll distance in pixels.
const ARROW_SCROLL_PX: f64 = 300.0;
/// Dragging moves the row twice as fast as the pointer.
const DRAG_MULTIPLIER: i32 = 2;

/// Per-row drag state.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    dragging: bool,
    start_x: i32,
    scroll_start: i32,
}

fn scroll_by(list: &web_sys::HtmlDivElement, delta: f64) {
    let opts = ScrollToOptions::new();
    opts.set_left(delta);
    opts.set_behavior(ScrollBehavior::Smooth);
    list.scroll_by_with_scroll_to_options(&opts);
}

#[component]
pub fn CarouselRow(series: Vec<Serie>, synopsis_chars: usize) -> impl IntoView {
    let list_ref: NodeRef<html::Div> = NodeRef::new();
    let (drag, set_drag) = signal(DragState::default());

    let scroll_previous = move |_: MouseEvent| {
        if let Some(list) = list_ref.get_untracked() {
            scroll_by(&list, -ARROW_SCROLL_PX);
        }
    };
    let scroll_next = move |_: MouseEvent| {
        if let Some(list) = list_ref.get_untracked() {
            scroll_by(&list, ARROW_SCROLL_PX);
        }
    };

    // Vertical wheel motion drives horizontal scroll.
    let on_wheel = move |ev: WheelEvent| {
        ev.prevent_default();
        if let Some(list) = list_ref.get_untracked() {
            list.set_scroll_left(list.scroll_left() + ev.delta_y() as i32);
        }
    };

    let on_mousedown = move |ev: MouseEvent| {
        if let Some(list) = list_ref.get_untracked() {
            ev.prevent_default();
            set_drag.set(DragState {
                dragging: true,
                start_x: ev.page_x() - list.offset_left(),
                scroll_start: list.scroll_left(),
            });
        }
    };

    let on_mousemove = move |ev: MouseEvent| {
        let state = drag.get_untracked();
        if !state.dragging {
            return;
        }
        if let Some(list) = list_ref.get_untracked() {
            let x = ev.page_x() - list.offset_left();
            let walk = (x - state.start_x) * DRAG_MULTIPLIER;
            list.set_scroll_left(state.scroll_start - walk);
        }
    };

    // Releasing anywhere on the page ends the drag.
    Effect::new(move |_| {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let on_mouseup = Closure::<dyn FnMut()>::new(move || {
            set_drag.update(|state| state.dragging = false);
        });
        let _ = document
            .add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        on_mouseup.forget();
    });

    view! {
        <div class="series-row">
            <button class="arrow left" aria-label="Défiler vers la gauche" on:click=scroll_previous>
                "❮"
            </button>
            <div
                class="series-list"
                class:dragging=move || drag.get().dragging
                node_ref=list_ref
                on:wheel=on_wheel
                on:mousedown=on_mousedown
                on:mousemove=on_mousemove
            >
                {series
                    .into_iter()
                    .map(|serie| view! { <SeriesCard serie synopsis_chars /> })
                    .collect_view()}
            </div>
            <button class="arrow right" aria-label="Défiler vers la droite" on:click=scroll_next>
                "❯"
            </button>
        </div>
    }
}
