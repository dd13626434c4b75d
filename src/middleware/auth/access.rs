//! access token (JWT) 検証 → AuthCtx を extensions に入れる
//!
//! この middleware はリクエストを拒否しない:
//! - 検証に成功した時だけ `AuthCtx` を extensions に入れる
//! - header 無し / 検証失敗は「何も付けない」= handler 側の gate が
//!   Unauthenticated として扱う (曖昧なケースは常に制限側に倒す)

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, header},
    middleware::{self, Next},
    response::Response,
};

use crate::api::v1::extractors::AuthCtx;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// `/api/v1/*` に bearer 検証を掛ける。
///
/// 例：
/// ```ignore
/// let v1 = access::apply(api::v1::routes(), auth.clone());
/// app = app.nest("/api/v1", v1);
/// ```
pub fn apply(router: Router<AppState>, auth: Arc<AuthService>) -> Router<AppState> {
    // axum 0.8 の from_fn は State extractor を受け取れないため、`from_fn_with_state` で明示的に渡す
    router.layer(middleware::from_fn_with_state(auth, access_middleware))
}

async fn access_middleware(
    State(auth): State<Arc<AuthService>>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    if let Some(token) = token {
        // JWT 署名検証 + iss/aud/exp/leeway は AuthService 側で実施
        match auth.verify_identity(token) {
            Ok(identity) => {
                // middleware → extractor への受け渡し
                req.extensions_mut().insert(AuthCtx::new(identity.subject_id));
            }
            Err(err) => {
                // Do not reject here; an unverifiable token is the same as
                // no token as far as the self-service gate is concerned.
                tracing::warn!(error = ?err, "access token verification failed");
            }
        }
    }

    next.run(req).await
}
