use crate::domain::obligation::Obligation;
use crate::domain::ports::ObligationStore;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for obligations.
///
/// Uses `Arc<RwLock<Vec<Obligation>>>` to allow shared concurrent access while
/// preserving insertion order; the allocation contract depends on the supply
/// being an ordered sequence and permits duplicate ids.
#[derive(Default, Clone)]
pub struct InMemoryObligationStore {
    obligations: Arc<RwLock<Vec<Obligation>>>,
}

impl InMemoryObligationStore {
    /// Creates a new, empty in-memory obligation store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ObligationStore for InMemoryObligationStore {
    async fn store(&self, obligation: Obligation) -> Result<()> {
        let mut obligations = self.obligations.write().await;
        obligations.push(obligation);
        Ok(())
    }

    async fn get_all(&self) -> Result<Vec<Obligation>> {
        let obligations = self.obligations.read().await;
        Ok(obligations.clone())
    }
}
