use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One page of a discover listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverResponse {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub results: Vec<MovieSummary>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_results: u64,
}

/// Raw movie record from the discover listing.
///
/// Identifier and title are optional on the wire; records missing either are
/// unusable and get skipped during the refresh pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSummary {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub backdrop_path: Option<String>,
}

/// Watch-provider availability, keyed by region code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchProvidersResponse {
    #[serde(default)]
    pub results: HashMap<String, RegionAvailability>,
}

impl WatchProvidersResponse {
    /// Whether the movie is watchable in `region` through any of the
    /// subscription, purchase, or rental categories.
    pub fn available_in(&self, region: &str) -> bool {
        self.results
            .get(region)
            .map(RegionAvailability::has_offering)
            .unwrap_or(false)
    }
}

/// Provider categories for a single region. The API omits a category key
/// entirely when there are no offerings of that kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionAvailability {
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub flatrate: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub buy: Option<Vec<ProviderEntry>>,
    #[serde(default)]
    pub rent: Option<Vec<ProviderEntry>>,
}

impl RegionAvailability {
    pub fn has_offering(&self) -> bool {
        self.flatrate.is_some() || self.buy.is_some() || self.rent.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderEntry {
    #[serde(default)]
    pub provider_id: Option<i64>,
    #[serde(default)]
    pub provider_name: Option<String>,
}

/// Cross-reference identifiers for a single movie.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalIds {
    #[serde(default)]
    pub imdb_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_in_requires_regional_entry() {
        let response: WatchProvidersResponse = serde_json::from_str(
            r#"{"results": {"US": {"flatrate": [{"provider_id": 8, "provider_name": "Netflix"}]}}}"#,
        )
        .unwrap();

        assert!(response.available_in("US"));
        assert!(!response.available_in("IN"));
    }

    #[test]
    fn test_available_in_requires_an_offering_category() {
        let response: WatchProvidersResponse = serde_json::from_str(
            r#"{"results": {"IN": {"link": "https://www.themoviedb.org/movie/10/watch"}}}"#,
        )
        .unwrap();

        assert!(!response.available_in("IN"));
    }

    #[test]
    fn test_any_single_category_counts_as_available() {
        for category in ["flatrate", "buy", "rent"] {
            let json = format!(r#"{{"results": {{"IN": {{"{}": []}}}}}}"#, category);
            let response: WatchProvidersResponse = serde_json::from_str(&json).unwrap();
            assert!(response.available_in("IN"), "category {category}");
        }
    }

    #[test]
    fn test_movie_summary_tolerates_sparse_records() {
        let movie: MovieSummary = serde_json::from_str(r#"{"title": "Untracked"}"#).unwrap();
        assert_eq!(movie.id, None);
        assert_eq!(movie.title.as_deref(), Some("Untracked"));
        assert_eq!(movie.poster_path, None);
    }
}
