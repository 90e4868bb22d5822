//! My-List Endpoint
//!
//! A single toggle call covers both adding and removing; the backend
//! reports which one happened.

use serde::Serialize;

use super::post_json;
use crate::error::ApiError;
use crate::models::{ToggleAction, ToggleListResponse};

#[derive(Serialize)]
struct ToggleListArgs {
    serie_id: u32,
}

pub async fn toggle_list(serie_id: u32) -> Result<ToggleAction, ApiError> {
    let data: ToggleListResponse =
        post_json("/api/toggle_list", &ToggleListArgs { serie_id }).await?;
    if !data.success {
        return Err(ApiError::rejected(data.code.as_deref(), data.error));
    }
    data.action
        .ok_or_else(|| ApiError::Decode("toggle_list: action manquante".to_string()))
}
