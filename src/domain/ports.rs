use super::obligation::Obligation;
use crate::error::Result;
use async_trait::async_trait;

/// Collaborator that supplies the obligation portfolio as a read-only ordered
/// sequence. Duplicate ids are preserved.
#[async_trait]
pub trait ObligationStore: Send + Sync {
    async fn store(&self, obligation: Obligation) -> Result<()>;
    async fn get_all(&self) -> Result<Vec<Obligation>>;
}

pub type ObligationStoreBox = Box<dyn ObligationStore>;
