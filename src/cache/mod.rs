use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::AcceptedMovie;

/// Process-wide holder for the accepted movie list.
///
/// The list itself is immutable; a refresh run builds a complete new
/// sequence and swaps it in with [`MovieCache::replace`]. Readers clone the
/// current `Arc` and therefore observe either the pre-refresh or the
/// post-refresh snapshot, never a partial one. Overlapping refresh runs are
/// not serialized; whichever run finishes last wins.
#[derive(Clone)]
pub struct MovieCache {
    movies: Arc<RwLock<Arc<Vec<AcceptedMovie>>>>,
}

impl MovieCache {
    pub fn new() -> Self {
        Self {
            movies: Arc::new(RwLock::new(Arc::new(Vec::new()))),
        }
    }

    /// Current snapshot, in discovery order.
    pub async fn snapshot(&self) -> Arc<Vec<AcceptedMovie>> {
        self.movies.read().await.clone()
    }

    /// Install a freshly built list, discarding the previous one.
    pub async fn replace(&self, movies: Vec<AcceptedMovie>) {
        let mut guard = self.movies.write().await;
        *guard = Arc::new(movies);
    }

    pub async fn len(&self) -> usize {
        self.movies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.movies.read().await.is_empty()
    }
}

impl Default for MovieCache {
    fn default() -> Self {
        Self::new()
    }
}
