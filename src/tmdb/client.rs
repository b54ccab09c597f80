use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;

use crate::config::TmdbConfig;
use crate::tmdb::models::{DiscoverResponse, ExternalIds, MovieSummary, WatchProvidersResponse};
use crate::tmdb::{MovieProvider, TmdbError};

const BASE_URL: &str = "https://api.themoviedb.org/3";

/// Concrete TMDB client backed by reqwest.
///
/// Timeouts are applied per request rather than on the client: the discover
/// query gets a longer budget than the per-movie lookups, and a whole refresh
/// run has no deadline of its own.
#[derive(Clone)]
pub struct TmdbClient {
    client: Client,
    api_key: String,
    language: String,
    region: String,
    discover_timeout: Duration,
    lookup_timeout: Duration,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        let client = Client::builder()
            .user_agent(concat!("malayalam-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            region: config.region.clone(),
            discover_timeout: Duration::from_secs(config.discover_timeout_secs),
            lookup_timeout: Duration::from_secs(config.lookup_timeout_secs),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", BASE_URL, path)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> crate::tmdb::Result<T> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TmdbError::Api {
                status_code: status.as_u16(),
                message,
            });
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl MovieProvider for TmdbClient {
    async fn discover_page(
        &self,
        page: u32,
        release_date_lte: NaiveDate,
    ) -> crate::tmdb::Result<Vec<MovieSummary>> {
        let release_date_lte = release_date_lte.format("%Y-%m-%d").to_string();
        let page = page.to_string();

        let response = self
            .client
            .get(self.url("/discover/movie"))
            .timeout(self.discover_timeout)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("with_original_language", self.language.as_str()),
                ("sort_by", "release_date.desc"),
                ("release_date.lte", release_date_lte.as_str()),
                ("region", self.region.as_str()),
                ("page", page.as_str()),
            ])
            .send()
            .await?;

        let listing: DiscoverResponse = self.handle_response(response).await?;
        Ok(listing.results)
    }

    async fn watch_providers(&self, movie_id: i64) -> crate::tmdb::Result<WatchProvidersResponse> {
        let response = self
            .client
            .get(self.url(&format!("/movie/{}/watch/providers", movie_id)))
            .timeout(self.lookup_timeout)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }

    async fn external_ids(&self, movie_id: i64) -> crate::tmdb::Result<ExternalIds> {
        let response = self
            .client
            .get(self.url(&format!("/movie/{}/external_ids", movie_id)))
            .timeout(self.lookup_timeout)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?;

        self.handle_response(response).await
    }
}
