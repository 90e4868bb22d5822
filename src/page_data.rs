//! Page-Embedded Data
//!
//! The server embeds per-page inputs as `data-*` attributes on `<body>`
//! (hero image set, series identity, list snapshot, session flag). This
//! module is the single reader for those attributes, plus the full-page
//! navigation helpers.

use crate::models::Serie;

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// One `data-*` attribute off `<body>`, by camelCase key.
pub fn body_data(key: &str) -> Option<String> {
    body().and_then(|body| body.dataset().get(key))
}

/// Current location path ("/" when unavailable).
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Full-page navigation.
pub fn redirect(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(url);
    }
}

/// Hero image set from `data-hero-images` (JSON array of URLs).
pub fn hero_images() -> Vec<String> {
    body_data("heroImages")
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Whether the server rendered this page for a logged-in visitor.
pub fn is_authenticated() -> bool {
    body_data("authenticated").as_deref() == Some("true")
}

/// Inputs of the series detail page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriePageData {
    pub id: u32,
    pub name: String,
    pub user_rating: u8,
    pub in_list: bool,
    pub synopsis: String,
}

pub fn serie_page_data() -> Option<SeriePageData> {
    let id = body_data("serieId")?.parse().ok()?;
    let name = body_data("serieName")?;
    let user_rating = body_data("userRating")
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    let in_list = body_data("inList").as_deref() == Some("true");
    let synopsis = body_data("synopsis").unwrap_or_default();
    Some(SeriePageData {
        id,
        name,
        user_rating,
        in_list,
        synopsis,
    })
}

/// Initial my-list snapshot from `data-my-list` (JSON array of series).
pub fn my_list_entries() -> Vec<Serie> {
    body_data("myList")
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}
