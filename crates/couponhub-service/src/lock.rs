//! The pool-wide write lock shared by the allocator and pool management.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

/// Single global mutex serializing every read-modify-write of the pool.
///
/// Cloning shares the same mutex.
#[derive(Debug, Clone, Default)]
pub struct PoolLock {
    inner: Arc<Mutex<()>>,
}

impl PoolLock {
    /// Creates a new, unlocked pool lock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to the pool.
    pub async fn acquire(&self) -> MutexGuard<'_, ()> {
        self.inner.lock().await
    }
}
