use std::sync::Arc;

use tokio::sync::RwLock;

/// Runs a closure against the store on the blocking pool, write lock held
/// for the duration. The store does whole-file reads and writes, which must
/// stay off the async runtime threads.
pub async fn with_store_blocking<S, R, F>(
    store: Arc<RwLock<S>>,
    f: F,
) -> Result<R, tokio::task::JoinError>
where
    S: Send + Sync + 'static,
    R: Send + 'static,
    F: FnOnce(&mut S) -> R + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut guard = store.blocking_write();
        f(&mut *guard)
    })
    .await
}
