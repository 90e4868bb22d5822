//! Hero Slideshow Component
//!
//! Rotates the hero background through the image set embedded in the
//! page. Fire-and-forget: the loop lives until the page unloads.

use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::page_data;

/// Delay between two hero images.
const ROTATE_MS: u64 = 5000;

#[component]
pub fn HeroSlideshow() -> impl IntoView {
    let images = page_data::hero_images();
    let count = images.len();
    let (index, set_index) = signal(0usize);

    if count > 1 {
        spawn_local(async move {
            loop {
                sleep(Duration::from_millis(ROTATE_MS)).await;
                set_index.update(|i| *i = (*i + 1) % count);
            }
        });
    }

    let background = move || {
        images
            .get(index.get())
            .map(|url| format!("url(\"{url}\")"))
            .unwrap_or_default()
    };

    view! {
        <section id="hero">
            <div id="heroBg" class="hero-bg" style:background-image=background></div>
        </section>
    }
}
