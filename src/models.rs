//! Frontend Models
//!
//! Data structures matching the JSON API payloads. Everything here is
//! rebuilt from a response on each page view; nothing is persisted
//! client-side.

use serde::{Deserialize, Deserializer, Serialize};

/// Poster shown when a series has no image of its own.
pub const DEFAULT_POSTER: &str = "/static/images/default_poster.jpg";

/// One series as returned by the catalog, search, similar and
/// recommendation endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Serie {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub synopsis: Option<String>,
}

impl Serie {
    /// Poster image URL with the site-wide fallback.
    pub fn poster_url(&self) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_POSTER.to_string())
    }
}

/// `{results: [...]}` wrapper used by /api/series and /api/similar.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SerieListResponse {
    #[serde(default)]
    pub results: Vec<Serie>,
}

/// Response of /api/search. The renderer assumes `count` matches
/// `results.len()` for the zero-result branch.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchResults {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub results: Vec<Serie>,
}

/// Response of /api/recommend_user. A missing or malformed list counts
/// as empty, so the section can fall back to its encouragement message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendationResponse {
    #[serde(default, deserialize_with = "lenient_series")]
    pub recommendations: Vec<Serie>,
}

fn lenient_series<'de, D>(deserializer: D) -> Result<Vec<Serie>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// One rated series on the my-ratings page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RatedSerie {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image_url: Option<String>,
    pub user_rating: u8,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

impl RatedSerie {
    pub fn poster_url(&self) -> String {
        self.image_url
            .clone()
            .unwrap_or_else(|| DEFAULT_POSTER.to_string())
    }
}

/// Response of /api/my_ratings: either `{results}` or `{error}`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MyRatingsResponse {
    #[serde(default)]
    pub results: Option<Vec<RatedSerie>>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Outcome reported by /api/toggle_list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleAction {
    Added,
    Removed,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToggleListResponse {
    pub success: bool,
    #[serde(default)]
    pub action: Option<ToggleAction>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

/// Plain `{success, error?}` acknowledgement (rate, login, signup).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AckResponse {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serie_parses_without_optional_fields() {
        let serie: Serie = serde_json::from_str(r#"{"id": 7, "name": "Dark"}"#).unwrap();
        assert_eq!(serie.id, 7);
        assert_eq!(serie.synopsis, None);
        assert_eq!(serie.poster_url(), DEFAULT_POSTER);
    }

    #[test]
    fn toggle_action_parses_lowercase() {
        let response: ToggleListResponse =
            serde_json::from_str(r#"{"success": true, "action": "added"}"#).unwrap();
        assert_eq!(response.action, Some(ToggleAction::Added));
        let response: ToggleListResponse =
            serde_json::from_str(r#"{"success": true, "action": "removed"}"#).unwrap();
        assert_eq!(response.action, Some(ToggleAction::Removed));
    }

    #[test]
    fn recommendations_tolerate_missing_or_malformed_list() {
        let response: RecommendationResponse = serde_json::from_str("{}").unwrap();
        assert!(response.recommendations.is_empty());

        let response: RecommendationResponse =
            serde_json::from_str(r#"{"recommendations": 42}"#).unwrap();
        assert!(response.recommendations.is_empty());

        let response: RecommendationResponse = serde_json::from_str(
            r#"{"recommendations": [{"id": 1, "name": "Dark", "image_url": "/a.jpg", "synopsis": "x"}]}"#,
        )
        .unwrap();
        assert_eq!(response.recommendations.len(), 1);
    }

    #[test]
    fn search_results_parse() {
        let data: SearchResults = serde_json::from_str(
            r#"{"query": "naruto", "count": 2, "results": [
                {"id": 1, "name": "Naruto"},
                {"id": 2, "name": "Naruto Shippuden"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(data.query, "naruto");
        assert_eq!(data.count, data.results.len());
    }
}
