//! Login / Signup Endpoints
//!
//! Both forms post their fields as one flat JSON object, the shape
//! `Object.fromEntries(new FormData(form))` produces.

use web_sys::HtmlFormElement;

use super::{js_to_string, post_raw};
use crate::error::ApiError;
use crate::models::AckResponse;

/// Serialize every field of `form` to a JSON object string.
pub fn form_payload(form: &HtmlFormElement) -> Result<String, ApiError> {
    let data = web_sys::FormData::new_with_form(form)
        .map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    let object =
        js_sys::Object::from_entries(&data).map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    let json = js_sys::JSON::stringify(&object).map_err(|e| ApiError::Decode(js_to_string(&e)))?;
    Ok(String::from(json))
}

async fn submit(url: &str, form: &HtmlFormElement) -> Result<(), ApiError> {
    let body = form_payload(form)?;
    let data: AckResponse = post_raw(url, &body).await?;
    if data.success {
        Ok(())
    } else {
        Err(ApiError::rejected(data.code.as_deref(), data.error))
    }
}

pub async fn login(form: &HtmlFormElement) -> Result<(), ApiError> {
    submit("/api/login", form).await
}

pub async fn signup(form: &HtmlFormElement) -> Result<(), ApiError> {
    submit("/api/signup", form).await
}
