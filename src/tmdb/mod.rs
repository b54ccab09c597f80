//! TMDB API client
//!
//! Typed client for the three upstream queries the catalog depends on:
//! movie discovery, per-movie watch providers, and per-movie external ids.
//! The [`MovieProvider`] trait is the seam between the refresh pipeline and
//! the network, so the pipeline can be exercised against stub providers.

use async_trait::async_trait;
use chrono::NaiveDate;

pub mod client;
pub mod error;
pub mod models;

pub use client::TmdbClient;
pub use error::TmdbError;
pub use models::{ExternalIds, MovieSummary, WatchProvidersResponse};

pub type Result<T> = std::result::Result<T, TmdbError>;

#[async_trait]
pub trait MovieProvider {
    /// Fetch one page of the discover listing, newest releases first,
    /// restricted to releases on or before `release_date_lte`.
    async fn discover_page(
        &self,
        page: u32,
        release_date_lte: NaiveDate,
    ) -> Result<Vec<MovieSummary>>;

    /// Fetch regional watch-provider availability for one movie.
    async fn watch_providers(&self, movie_id: i64) -> Result<WatchProvidersResponse>;

    /// Fetch cross-reference identifiers for one movie.
    async fn external_ids(&self, movie_id: i64) -> Result<ExternalIds>;
}
