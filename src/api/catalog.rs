//! Catalog Endpoints
//!
//! Read-only series data: trending catalog, search, similar series,
//! personal recommendations and the visitor's ratings.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::get_json;
use crate::error::ApiError;
use crate::models::{
    MyRatingsResponse, RatedSerie, RecommendationResponse, SearchResults, Serie,
    SerieListResponse,
};

/// Characters `encodeURIComponent` leaves verbatim.
const QUERY: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

pub fn encode_query(query: &str) -> String {
    utf8_percent_encode(query, QUERY).to_string()
}

pub async fn fetch_series() -> Result<Vec<Serie>, ApiError> {
    let data: SerieListResponse = get_json("/api/series").await?;
    Ok(data.results)
}

pub async fn search(query: &str) -> Result<SearchResults, ApiError> {
    get_json(&format!("/api/search?q={}", encode_query(query))).await
}

pub async fn similar(serie_id: u32) -> Result<Vec<Serie>, ApiError> {
    let data: SerieListResponse = get_json(&format!("/api/similar/{serie_id}")).await?;
    Ok(data.results)
}

pub async fn recommend_user() -> Result<Vec<Serie>, ApiError> {
    let data: RecommendationResponse = get_json("/api/recommend_user").await?;
    Ok(data.recommendations)
}

pub async fn my_ratings() -> Result<Vec<RatedSerie>, ApiError> {
    let data: MyRatingsResponse = get_json("/api/my_ratings").await?;
    match (data.results, data.error) {
        (Some(results), None) => Ok(results),
        (_, error) => Err(ApiError::rejected(None, error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_encoding_matches_encode_uri_component() {
        assert_eq!(encode_query("naruto"), "naruto");
        assert_eq!(encode_query("one piece"), "one%20piece");
        assert_eq!(encode_query("l'attaque"), "l'attaque");
        assert_eq!(encode_query("été"), "%C3%A9t%C3%A9");
        assert_eq!(encode_query("a&b=c"), "a%26b%3Dc");
    }
}
