/*
 * POST /api/v1/persons の end-to-end 契約:
 * - 認証なし → 401, entity は作られない
 * - self (authId == 検証済み identity) → 201, entity が 1 件作られる
 * - non-self → 403, entity は作られない
 * 永続化は in-memory double に差し替えて store 呼び出しの有無を観測する。
 */
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    Extension, Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use persons_api::{
    api,
    api::v1::extractors::AuthCtx,
    domain::{Person, StoredPerson},
    repos::{PersonStore, RepoError},
    state::AppState,
};

/// Observable stand-in for the persistence collaborator.
#[derive(Default)]
struct InMemoryPersonStore {
    created: Mutex<Vec<StoredPerson>>,
}

impl InMemoryPersonStore {
    fn created(&self) -> Vec<StoredPerson> {
        self.created.lock().unwrap().clone()
    }
}

#[async_trait]
impl PersonStore for InMemoryPersonStore {
    async fn create(&self, person: Person) -> Result<StoredPerson, RepoError> {
        let stored = StoredPerson {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            person,
        };
        self.created.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

/// Store that fails after authorization succeeded.
struct FailingPersonStore;

#[async_trait]
impl PersonStore for FailingPersonStore {
    async fn create(&self, _person: Person) -> Result<StoredPerson, RepoError> {
        Err(RepoError::Db(sqlx::Error::RowNotFound))
    }
}

fn app(store: Arc<dyn PersonStore>) -> Router {
    // Bearer middleware is not applied here; tests inject the verified
    // context directly, standing in for the identity layer.
    Router::new()
        .nest("/api/v1", api::v1::routes())
        .with_state(AppState::new(store))
}

fn authed_app(store: Arc<dyn PersonStore>, subject_id: &str) -> Router {
    app(store).layer(Extension(AuthCtx::new(subject_id)))
}

fn random_auth_id() -> String {
    Uuid::new_v4().simple().to_string()
}

fn joe_bob_json(auth_id: &str) -> Value {
    json!({
        "authId": auth_id,
        "name": "Joe Bob",
        "givenName": "Joe",
        "familyName": "Bob",
        "email": "jbob@foo.com",
        "phone": "555-565-383",
        "backupPhone": "555-384-2832",
        "avatarUrl": "https://avatars.com/joeBob",
        "addresses": [
            {
                "address1": "100 Main Str",
                "city": "Anwhere",
                "state": "TX",
                "zip": "78383-4833",
                "label": "home"
            }
        ]
    })
}

fn post_persons(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/persons")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn create_person_no_authentication() {
    let store = Arc::new(InMemoryPersonStore::default());
    let app = app(store.clone());

    // Well-formed payload; the missing auth context alone decides the result.
    let payload = joe_bob_json(&random_auth_id());
    let response = app.oneshot(post_persons(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "UNAUTHENTICATED");

    assert!(store.created().is_empty(), "no entity may be constructed");
}

#[tokio::test]
async fn create_person_valid() {
    let auth_id = random_auth_id();
    let store = Arc::new(InMemoryPersonStore::default());
    let app = authed_app(store.clone(), &auth_id);

    let payload = joe_bob_json(&auth_id);
    let response = app.oneshot(post_persons(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["authId"], auth_id.as_str());
    assert_eq!(body["name"], "Joe Bob");
    assert_eq!(body["addresses"].as_array().unwrap().len(), 1);
    assert_eq!(body["addresses"][0]["address1"], "100 Main Str");
    assert_eq!(body["addresses"][0]["label"], "home");

    let created = store.created();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].person.subject_id, auth_id);
    assert_eq!(created[0].person.addresses.len(), 1);
    assert_eq!(created[0].person.addresses[0].zip, "78383-4833");
}

#[tokio::test]
async fn create_person_non_self() {
    let auth_id1 = random_auth_id();
    let auth_id2 = random_auth_id();
    let store = Arc::new(InMemoryPersonStore::default());
    let app = authed_app(store.clone(), &auth_id1);

    let payload = joe_bob_json(&auth_id2);
    let response = app.oneshot(post_persons(payload.to_string())).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "FORBIDDEN");

    assert!(store.created().is_empty(), "no entity may be constructed");
}

#[tokio::test]
async fn create_person_malformed_payload() {
    let auth_id = random_auth_id();
    let store = Arc::new(InMemoryPersonStore::default());
    let app = authed_app(store.clone(), &auth_id);

    // Decode failure is reported as a client error distinct from 401/403.
    let response = app
        .oneshot(post_persons("{not json".to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(store.created().is_empty());
}

#[tokio::test]
async fn create_person_twice_creates_two_entities() {
    let auth_id = random_auth_id();
    let store = Arc::new(InMemoryPersonStore::default());
    let app = authed_app(store.clone(), &auth_id);

    let payload = joe_bob_json(&auth_id).to_string();
    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(post_persons(payload.clone()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // No dedup: identical payloads yield two distinct entities.
    let created = store.created();
    assert_eq!(created.len(), 2);
    assert_ne!(created[0].id, created[1].id);
}

#[tokio::test]
async fn create_person_store_failure_is_server_error() {
    let auth_id = random_auth_id();
    let app = authed_app(Arc::new(FailingPersonStore), &auth_id);

    let payload = joe_bob_json(&auth_id);
    let response = app.oneshot(post_persons(payload.to_string())).await.unwrap();

    // Authorization succeeded; only the persistence collaborator failed.
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
