/*
 * Responsibility
 * - Persons の request/response DTO (wire 名は camelCase)
 * - validate() は形式チェックのみ (authId の認可判定は gate の責務)
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{Address, Person, PersonDraft, StoredPerson};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePersonRequest {
    /// Self-declared subject identity. The gate compares this against the
    /// caller's verified identity before anything else happens.
    pub auth_id: String,
    /// Display name ("name" on the wire).
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub backup_phone: Option<String>,
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub addresses: Vec<AddressPayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub label: String,
}

impl CreatePersonRequest {
    /// Field-level checks only. Runs after the gate: full payload
    /// validation never gates the auth decision.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("name is required");
        }
        if let Some(url) = &self.avatar_url
            && url.len() > 256
        {
            return Err("avatarUrl must be <= 256 chars");
        }

        Ok(())
    }

    /// Everything except the subject, which only the gate may supply.
    pub fn into_draft(self) -> PersonDraft {
        PersonDraft {
            display_name: self.name,
            given_name: self.given_name,
            family_name: self.family_name,
            email: self.email,
            phone: self.phone,
            backup_phone: self.backup_phone,
            avatar_url: self.avatar_url,
            addresses: self.addresses.into_iter().map(Address::from).collect(),
        }
    }
}

impl From<AddressPayload> for Address {
    fn from(p: AddressPayload) -> Self {
        Address {
            address1: p.address1,
            city: p.city,
            state: p.state,
            zip: p.zip,
            label: p.label,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonResponse {
    pub id: Uuid,
    pub auth_id: String,
    pub name: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub backup_phone: Option<String>,
    pub avatar_url: Option<String>,
    pub addresses: Vec<AddressResponse>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub address1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub label: String,
}

impl From<StoredPerson> for PersonResponse {
    fn from(stored: StoredPerson) -> Self {
        let Person {
            subject_id,
            display_name,
            given_name,
            family_name,
            email,
            phone,
            backup_phone,
            avatar_url,
            addresses,
        } = stored.person;

        PersonResponse {
            id: stored.id,
            auth_id: subject_id,
            name: display_name,
            given_name,
            family_name,
            email,
            phone,
            backup_phone,
            avatar_url,
            addresses: addresses
                .into_iter()
                .map(|a| AddressResponse {
                    address1: a.address1,
                    city: a.city,
                    state: a.state,
                    zip: a.zip,
                    label: a.label,
                })
                .collect(),
            created_at: stored.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_wire_field_names() {
        let req: CreatePersonRequest = serde_json::from_value(serde_json::json!({
            "authId": "A1B2",
            "name": "Joe Bob",
            "givenName": "Joe",
            "familyName": "Bob",
            "email": "jbob@foo.com",
            "phone": "555-565-383",
            "backupPhone": "555-384-2832",
            "avatarUrl": "https://avatars.com/joeBob",
            "addresses": [{
                "address1": "100 Main Str",
                "city": "Anwhere",
                "state": "TX",
                "zip": "78383-4833",
                "label": "home"
            }]
        }))
        .unwrap();

        assert_eq!(req.auth_id, "A1B2");
        assert_eq!(req.name, "Joe Bob");
        assert_eq!(req.backup_phone.as_deref(), Some("555-384-2832"));
        assert_eq!(req.addresses.len(), 1);
        assert_eq!(req.addresses[0].zip, "78383-4833");
        assert_eq!(req.addresses[0].label, "home");
    }

    #[test]
    fn addresses_default_to_empty() {
        let req: CreatePersonRequest = serde_json::from_value(serde_json::json!({
            "authId": "A1B2",
            "name": "Joe Bob"
        }))
        .unwrap();

        assert!(req.addresses.is_empty());
        assert!(req.validate().is_ok());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let req: CreatePersonRequest = serde_json::from_value(serde_json::json!({
            "authId": "A1B2",
            "name": "  "
        }))
        .unwrap();

        assert!(req.validate().is_err());
    }
}
