//! Catalog refresh pipeline
//!
//! Rebuilds the movie cache from scratch: walk the discover listing page by
//! page, keep only candidates that are watchable in the configured region
//! and resolve to a usable IMDb id, then dedup and swap the cache.
//!
//! Failures are signals, not faults. A failed discover request ends the run
//! early but keeps everything accumulated so far; a failed per-movie lookup
//! excludes that movie only. A run never propagates an error to its caller.

use std::collections::HashSet;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::cache::MovieCache;
use crate::config::TmdbConfig;
use crate::models::AcceptedMovie;
use crate::tmdb::{MovieProvider, TmdbClient};

#[derive(Debug, Clone)]
pub struct RefreshOptions {
    /// Region whose watch-provider offerings decide availability.
    pub region: String,
    /// Hard upper bound on discover pagination.
    pub max_pages: u32,
}

impl RefreshOptions {
    pub fn from_config(config: &TmdbConfig) -> Self {
        Self {
            region: config.region.clone(),
            max_pages: config.max_pages,
        }
    }
}

/// Drives refresh runs against the live TMDB client and installs the result
/// into the shared cache.
///
/// Cloneable so the web layer can spawn detached runs. Concurrent runs are
/// not guarded against; each builds its own list and the last one to finish
/// overwrites the cache.
#[derive(Clone)]
pub struct CatalogRefresher {
    client: TmdbClient,
    cache: MovieCache,
    options: RefreshOptions,
}

impl CatalogRefresher {
    pub fn new(client: TmdbClient, cache: MovieCache, options: RefreshOptions) -> Self {
        Self {
            client,
            cache,
            options,
        }
    }

    /// One full refresh run, start to finish or to early termination.
    pub async fn refresh(&self) {
        info!("Starting catalog refresh");

        let today = Utc::now().date_naive();
        let movies = build_catalog(&self.client, &self.options, today).await;

        info!("Catalog refresh complete: {} movies cached", movies.len());
        self.cache.replace(movies).await;
    }
}

/// Run the full pipeline against `provider`: accumulate, then dedup.
pub async fn build_catalog<P: MovieProvider>(
    provider: &P,
    options: &RefreshOptions,
    today: NaiveDate,
) -> Vec<AcceptedMovie> {
    let accepted = collect_available_movies(provider, options, today).await;
    dedup_by_imdb_id(accepted)
}

/// Walk the discover listing and accumulate every candidate that passes the
/// availability and external-id checks, in discovery order. May contain
/// duplicate IMDb ids when the listing overlaps across pages.
pub async fn collect_available_movies<P: MovieProvider>(
    provider: &P,
    options: &RefreshOptions,
    today: NaiveDate,
) -> Vec<AcceptedMovie> {
    let mut accepted = Vec::new();

    for page in 1..=options.max_pages {
        debug!("Checking discover page {}", page);

        let results = match provider.discover_page(page, today).await {
            Ok(results) => results,
            Err(e) => {
                warn!("Discover page {} failed, stopping pagination: {}", page, e);
                break;
            }
        };

        if results.is_empty() {
            debug!("No results on page {}, assuming listing exhausted", page);
            break;
        }

        for movie in results {
            let (tmdb_id, title) = match (movie.id, movie.title.clone()) {
                (Some(id), Some(title)) if !title.is_empty() => (id, title),
                _ => continue,
            };

            match provider.watch_providers(tmdb_id).await {
                Ok(providers) if providers.available_in(&options.region) => {}
                Ok(_) => {
                    debug!("'{}' has no OTT providers in {}, skipping", title, options.region);
                    continue;
                }
                Err(e) => {
                    debug!("Provider lookup for '{}' failed, skipping: {}", title, e);
                    continue;
                }
            }

            match provider.external_ids(tmdb_id).await {
                Ok(ids) => {
                    if let Some(imdb_id) = usable_imdb_id(ids.imdb_id.as_deref()) {
                        debug!("Accepted '{}' ({})", title, imdb_id);
                        accepted.push(AcceptedMovie {
                            tmdb_id,
                            imdb_id,
                            title,
                            overview: movie.overview,
                            release_date: movie.release_date,
                            poster_path: movie.poster_path,
                            backdrop_path: movie.backdrop_path,
                        });
                    } else {
                        debug!("'{}' has no usable IMDb id, skipping", title);
                    }
                }
                Err(e) => {
                    debug!("External id lookup for '{}' failed, skipping: {}", title, e);
                }
            }
        }
    }

    accepted
}

/// An IMDb id the catalog protocol can address: non-empty and `tt`-prefixed.
fn usable_imdb_id(raw: Option<&str>) -> Option<String> {
    raw.filter(|id| id.starts_with("tt")).map(str::to_string)
}

/// Keep the first occurrence of each IMDb id, preserving order.
pub fn dedup_by_imdb_id(movies: Vec<AcceptedMovie>) -> Vec<AcceptedMovie> {
    let mut seen = HashSet::new();
    movies
        .into_iter()
        .filter(|movie| seen.insert(movie.imdb_id.clone()))
        .collect()
}
