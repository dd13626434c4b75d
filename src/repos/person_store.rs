/*
 * Responsibility
 * - 永続化 collaborator の seam (trait)
 * - handler は具象を知らない: Postgres 実装は person_pg、tests は in-memory double
 */
use async_trait::async_trait;

use crate::domain::{Person, StoredPerson};
use crate::repos::error::RepoError;

/// Opaque persistence collaborator for validated Persons.
///
/// Callers hand in a `Person` that already passed the authorization gate;
/// the store assigns server-side identity and returns the stored
/// representation. Storage failure is independent of authorization and is
/// surfaced as `RepoError`.
#[async_trait]
pub trait PersonStore: Send + Sync {
    async fn create(&self, person: Person) -> Result<StoredPerson, RepoError>;
}
