//! View-Models
//!
//! UI state lives in plain values and rendering is a projection of them,
//! so everything here stays DOM-free and unit-testable.

use crate::models::{SearchResults, Serie};

// ========================
// Display budgets
// ========================

/// Synopsis budget on catalog and search cards.
pub const CATALOG_SYNOPSIS_CHARS: usize = 120;
/// Synopsis budget on recommendation cards.
pub const RECO_SYNOPSIS_CHARS: usize = 110;
/// Detail-page synopsis length past which the expand hint appears.
pub const SYNOPSIS_EXPAND_THRESHOLD: usize = 220;

// ========================
// Text projections
// ========================

/// Cut a synopsis down to `max` characters, appending an ellipsis.
pub fn truncate_synopsis(text: Option<&str>, max: usize) -> String {
    match text {
        None | Some("") => "Synopsis non disponible.".to_string(),
        Some(text) if text.chars().count() > max => {
            format!("{}...", text.chars().take(max).collect::<String>())
        }
        Some(text) => text.to_string(),
    }
}

/// Heading above the search results.
pub fn search_heading(query: &str, count: usize) -> String {
    if count > 0 {
        format!("Résultats pour « {query} » ({count})")
    } else {
        format!("Aucun résultat pour « {query} »")
    }
}

/// Average rating as displayed on a ratings card.
pub fn average_display(avg: Option<f64>) -> String {
    match avg {
        Some(value) => format!("{value}"),
        None => "–".to_string(),
    }
}

// ========================
// Catalog rows
// ========================

/// The catalog shows at most this many series.
pub const CATALOG_MAX_ITEMS: usize = 80;
/// Series per carousel row.
pub const CATALOG_ROW_SIZE: usize = 40;

/// First [`CATALOG_MAX_ITEMS`] series chunked into rows of
/// [`CATALOG_ROW_SIZE`].
pub fn chunk_rows(items: Vec<Serie>) -> Vec<Vec<Serie>> {
    let mut rows = Vec::new();
    let mut current = Vec::new();
    for serie in items.into_iter().take(CATALOG_MAX_ITEMS) {
        current.push(serie);
        if current.len() == CATALOG_ROW_SIZE {
            rows.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

// ========================
// Home results area
// ========================

/// What the results area of the home page is showing.
#[derive(Clone, PartialEq)]
pub enum ResultsView {
    /// The trending catalog (initial state).
    Catalog,
    /// A search is in flight; previous content is cleared.
    SearchPending,
    /// A finished search.
    Search(SearchResults),
}

// ========================
// Stars
// ========================

/// Active flags for the five stars given the current rating.
pub fn star_states(rating: u8) -> [bool; 5] {
    let mut states = [false; 5];
    for (i, state) in states.iter_mut().enumerate() {
        *state = (i as u8 + 1) <= rating;
    }
    states
}

// ========================
// List button
// ========================

/// Icon and label of the my-list toggle button.
pub fn list_button_face(in_list: bool) -> (&'static str, &'static str) {
    if in_list {
        ("✓", "Dans ma liste")
    } else {
        ("+", "Ajouter à ma liste")
    }
}

// ========================
// Removal confirmation
// ========================

/// Confirmation flow of the my-list removal modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RemovalFlow {
    #[default]
    Idle,
    /// Removal requested, waiting for confirm or cancel.
    Pending(u32),
    /// Removal posted, waiting for the backend.
    Submitting(u32),
}

impl RemovalFlow {
    pub fn request(&mut self, serie_id: u32) {
        if matches!(self, Self::Idle) {
            *self = Self::Pending(serie_id);
        }
    }

    pub fn cancel(&mut self) {
        if matches!(self, Self::Pending(_)) {
            *self = Self::Idle;
        }
    }

    /// Confirm the pending removal; returns the series to post.
    pub fn confirm(&mut self) -> Option<u32> {
        match *self {
            Self::Pending(id) => {
                *self = Self::Submitting(id);
                Some(id)
            }
            _ => None,
        }
    }

    /// Back to idle, whatever the outcome of the submission.
    pub fn finish(&mut self) {
        *self = Self::Idle;
    }

    /// The modal stays up from the remove click until the flow ends.
    pub fn modal_open(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}

// ========================
// Request sequencing
// ========================

/// Monotonic request tokens so a stale completion can be recognized and
/// dropped instead of overwriting newer state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    issued: u64,
}

impl RequestSeq {
    /// Issue the next token, invalidating all earlier ones.
    pub fn next(self) -> (Self, u64) {
        let token = self.issued + 1;
        (Self { issued: token }, token)
    }

    pub fn is_current(self, token: u64) -> bool {
        self.issued == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_serie(id: u32) -> Serie {
        Serie {
            id,
            name: format!("Serie {id}"),
            image_url: None,
            synopsis: None,
        }
    }

    fn make_series(count: usize) -> Vec<Serie> {
        (0..count as u32).map(make_serie).collect()
    }

    #[test]
    fn test_truncate_synopsis() {
        assert_eq!(truncate_synopsis(None, 120), "Synopsis non disponible.");
        assert_eq!(truncate_synopsis(Some(""), 120), "Synopsis non disponible.");
        assert_eq!(truncate_synopsis(Some("court"), 120), "court");

        let long = "x".repeat(130);
        let cut = truncate_synopsis(Some(&long), 120);
        assert_eq!(cut.chars().count(), 123);
        assert!(cut.ends_with("..."));

        // Counted in characters, not bytes.
        let accented = "é".repeat(130);
        let cut = truncate_synopsis(Some(&accented), 110);
        assert_eq!(cut.chars().count(), 113);
    }

    #[test]
    fn test_search_heading() {
        assert_eq!(
            search_heading("naruto", 2),
            "Résultats pour « naruto » (2)"
        );
        assert_eq!(search_heading("naruto", 0), "Aucun résultat pour « naruto »");
    }

    #[test]
    fn test_average_display() {
        assert_eq!(average_display(Some(3.7)), "3.7");
        assert_eq!(average_display(Some(4.0)), "4");
        assert_eq!(average_display(None), "–");
    }

    #[test]
    fn test_chunk_rows_counts() {
        // Row count is ceil(min(n, 80) / 40), no row over 40.
        for (n, expected_rows) in [(0, 0), (1, 1), (40, 1), (41, 2), (80, 2), (120, 2)] {
            let rows = chunk_rows(make_series(n));
            assert_eq!(rows.len(), expected_rows, "n = {n}");
            assert!(rows.iter().all(|row| row.len() <= CATALOG_ROW_SIZE));
            let total: usize = rows.iter().map(Vec::len).sum();
            assert_eq!(total, n.min(CATALOG_MAX_ITEMS));
        }
    }

    #[test]
    fn test_chunk_rows_keeps_order() {
        let rows = chunk_rows(make_series(41));
        assert_eq!(rows[0][0].id, 0);
        assert_eq!(rows[0][39].id, 39);
        assert_eq!(rows[1][0].id, 40);
    }

    #[test]
    fn test_star_states() {
        assert_eq!(star_states(0), [false; 5]);
        assert_eq!(star_states(3), [true, true, true, false, false]);
        assert_eq!(star_states(5), [true; 5]);
    }

    #[test]
    fn test_list_button_face() {
        assert_eq!(list_button_face(true), ("✓", "Dans ma liste"));
        assert_eq!(list_button_face(false), ("+", "Ajouter à ma liste"));
    }

    #[test]
    fn test_removal_flow() {
        let mut flow = RemovalFlow::default();
        assert!(!flow.modal_open());

        flow.request(7);
        assert_eq!(flow, RemovalFlow::Pending(7));
        assert!(flow.modal_open());

        // A second remove click cannot hijack the pending target.
        flow.request(9);
        assert_eq!(flow, RemovalFlow::Pending(7));

        flow.cancel();
        assert_eq!(flow, RemovalFlow::Idle);
        assert!(!flow.modal_open());

        flow.request(7);
        assert_eq!(flow.confirm(), Some(7));
        assert_eq!(flow, RemovalFlow::Submitting(7));
        assert!(flow.modal_open());

        // Cancel is a no-op once submitted; confirm cannot double-fire.
        flow.cancel();
        assert_eq!(flow, RemovalFlow::Submitting(7));
        assert_eq!(flow.confirm(), None);

        flow.finish();
        assert_eq!(flow, RemovalFlow::Idle);
    }

    #[test]
    fn test_request_seq() {
        let seq = RequestSeq::default();
        let (seq, first) = seq.next();
        assert!(seq.is_current(first));

        let (seq, second) = seq.next();
        assert!(seq.is_current(second));
        assert!(!seq.is_current(first));
    }
}
