use thiserror::Error;

/// Errors surfaced by the TMDB client.
///
/// The refresh pipeline treats these as signals rather than faults: a failed
/// discover request stops pagination, a failed per-movie lookup excludes
/// that movie. Nothing here is fatal to the process.
#[derive(Error, Debug)]
pub enum TmdbError {
    /// Transport-level failures, including request timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status returned by the API.
    #[error("TMDB API error: HTTP {status_code} - {message}")]
    Api { status_code: u16, message: String },
}
