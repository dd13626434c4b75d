/*
 * Responsibility
 * - POST /persons handler
 * - AuthCtx は extractor で明示的に受け取り、self-service gate に渡す
 * - gate の三値を transport の結果 (401/403/201) に対応させる
 * - entity 構築と store 呼び出しは Authorized の枝でのみ起きる
 */
use axum::{Json, extract::State, http::StatusCode};

use crate::{
    api::v1::{
        dto::persons::{CreatePersonRequest, PersonResponse},
        extractors::MaybeAuthCtx,
    },
    domain::Person,
    error::AppError,
    services::authz::{AuthContext, AuthzOutcome, authorize_self_create},
    state::AppState,
};

pub async fn create_person(
    State(state): State<AppState>,
    MaybeAuthCtx(auth): MaybeAuthCtx,
    Json(req): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonResponse>), AppError> {
    // Missing context and present-but-unauthenticated context land on the
    // same outcome; the gate makes that call, not the handler.
    let ctx = auth.as_ref().map(|c| c as &dyn AuthContext);

    let subject = match authorize_self_create(ctx, &req.auth_id) {
        AuthzOutcome::Unauthenticated => return Err(AppError::Unauthorized),
        AuthzOutcome::Forbidden => return Err(AppError::Forbidden),
        AuthzOutcome::Authorized(subject) => subject,
    };

    // Field validation only runs for an authorized caller.
    req.validate()
        .map_err(|msg| AppError::bad_request("INVALID_PERSON", msg))?;

    let person = Person::from_authorized(subject, req.into_draft());

    let stored = state.store.create(person).await.map_err(|e| {
        tracing::error!(error = ?e, "person store create failed");
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(PersonResponse::from(stored))))
}
