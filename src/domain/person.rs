/*
 * Responsibility
 * - Person / Address のドメイン型
 * - create path では AuthorizedSubject (gate の証明) を消費してのみ構築できる
 */
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::services::authz::AuthorizedSubject;

/// A profile to be created. `subject_id` is the authorization key, not
/// merely a data field: it names the authenticated principal owning the
/// profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub subject_id: String,
    pub display_name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub backup_phone: Option<String>,
    pub avatar_url: Option<String>,
    /// Insertion order as submitted; not semantically significant beyond
    /// display.
    pub addresses: Vec<Address>,
}

/// Embedded in exactly one Person; no identity or lifecycle of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub label: String,
}

/// Fields accompanying the subject on the create path.
#[derive(Debug, Clone, Default)]
pub struct PersonDraft {
    pub display_name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub backup_phone: Option<String>,
    pub avatar_url: Option<String>,
    pub addresses: Vec<Address>,
}

impl Person {
    /// The only constructor on the create path. Consuming
    /// `AuthorizedSubject` ties the instance to an identity the gate
    /// validated in the same request.
    pub fn from_authorized(subject: AuthorizedSubject, draft: PersonDraft) -> Self {
        Self {
            subject_id: subject.into_inner(),
            display_name: draft.display_name,
            given_name: draft.given_name,
            family_name: draft.family_name,
            email: draft.email,
            phone: draft.phone,
            backup_phone: draft.backup_phone,
            avatar_url: draft.avatar_url,
            addresses: draft.addresses,
        }
    }
}

/// What the store hands back after a successful create. Identity
/// assignment beyond `subject_id` belongs to the store.
#[derive(Debug, Clone)]
pub struct StoredPerson {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub person: Person,
}
