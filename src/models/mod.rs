use serde::{Deserialize, Serialize};

/// Base URL for TMDB-hosted artwork. Poster and background URLs are built by
/// appending a width segment and the raw path fragment from the API.
pub const TMDB_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

const POSTER_WIDTH: &str = "w500";
const BACKDROP_WIDTH: &str = "w780";

/// A discovered movie that passed both the availability and the external-id
/// checks. Immutable once built; the cache holds these in discovery order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AcceptedMovie {
    pub tmdb_id: i64,
    pub imdb_id: String,
    pub title: String,
    pub overview: Option<String>,
    pub release_date: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

impl AcceptedMovie {
    /// Project into the consumer-facing catalog shape. Returns `None` when
    /// the movie cannot be represented (blank id or title), which callers
    /// treat as "omit silently".
    pub fn to_meta(&self) -> Option<CatalogMeta> {
        if self.imdb_id.is_empty() || self.title.is_empty() {
            return None;
        }

        Some(CatalogMeta {
            id: self.imdb_id.clone(),
            media_type: "movie".to_string(),
            name: self.title.clone(),
            poster: self
                .poster_path
                .as_deref()
                .map(|path| image_url(POSTER_WIDTH, path)),
            description: self.overview.clone().unwrap_or_default(),
            release_info: self.release_date.clone().unwrap_or_default(),
            background: self
                .backdrop_path
                .as_deref()
                .map(|path| image_url(BACKDROP_WIDTH, path)),
        })
    }
}

fn image_url(width: &str, path: &str) -> String {
    format!("{}/{}{}", TMDB_IMAGE_BASE_URL, width, path)
}

/// One entry of the catalog response, in the shape the Stremio client expects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogMeta {
    pub id: String,
    #[serde(rename = "type")]
    pub media_type: String,
    pub name: String,
    pub poster: Option<String>,
    pub description: String,
    #[serde(rename = "releaseInfo")]
    pub release_info: String,
    pub background: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetasResponse {
    pub metas: Vec<CatalogMeta>,
}

/// Static addon descriptor served at `/manifest.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub catalogs: Vec<CatalogDescriptor>,
    #[serde(rename = "idPrefixes")]
    pub id_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub media_type: String,
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshResponse {
    pub status: String,
}
