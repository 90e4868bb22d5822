//! JSON API Bindings
//!
//! Thin async wrappers over `window.fetch`, organized by domain. Every
//! function resolves to a typed model or an [`ApiError`]; no component
//! touches the fetch machinery directly.

mod auth;
mod catalog;
mod list;
mod rating;

pub use auth::*;
pub use catalog::*;
pub use list::*;
pub use rating::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::error::ApiError;

pub(crate) fn js_to_string(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

fn window() -> Result<web_sys::Window, ApiError> {
    web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))
}

/// Run a prepared request and decode its JSON body.
async fn run<T: DeserializeOwned>(request: Request) -> Result<T, ApiError> {
    let promise = window()?.fetch_with_request(&request);
    let response = JsFuture::from(promise)
        .await
        .map_err(|e| ApiError::Network(js_to_string(&e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| ApiError::Network("fetch did not return a Response".to_string()))?;
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    let body = response
        .json()
        .map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    let json = JsFuture::from(body)
        .await
        .map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    serde_wasm_bindgen::from_value(json).map_err(|e| ApiError::Decode(e.to_string()))
}

/// GET `url` and decode the JSON response.
pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(js_to_string(&e)))?;
    run(request).await
}

/// POST a pre-serialized JSON body to `url`.
pub(crate) async fn post_raw<T: DeserializeOwned>(url: &str, body: &str) -> Result<T, ApiError> {
    let headers = Headers::new().map_err(|e| ApiError::Network(js_to_string(&e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Network(js_to_string(&e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| ApiError::Network(js_to_string(&e)))?;
    run(request).await
}

/// POST a serializable payload as JSON.
pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
    url: &str,
    payload: &B,
) -> Result<T, ApiError> {
    let body = serde_json::to_string(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
    post_raw(url, &body).await
}
