//! Rating Endpoint

use serde::Serialize;

use super::post_json;
use crate::error::ApiError;
use crate::models::AckResponse;

#[derive(Serialize)]
struct RateArgs<'a> {
    serie_name: &'a str,
    rating: u8,
}

pub async fn rate(serie_name: &str, rating: u8) -> Result<(), ApiError> {
    let data: AckResponse = post_json("/api/rate", &RateArgs { serie_name, rating }).await?;
    if data.success {
        Ok(())
    } else {
        Err(ApiError::rejected(data.code.as_deref(), data.error))
    }
}
