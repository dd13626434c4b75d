use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::state::AppState;

use super::AuthCtx;

/// Handler で、任意の AuthCtx を受け取るための extractor
///
/// middleware が検証に成功した場合のみ AuthCtx を extensions に入れている。
/// ここでは拒否しない: `None` をそのまま handler に渡し、三値の判定
/// (Unauthenticated / Forbidden / Authorized) は gate に一任する。
pub struct MaybeAuthCtx(pub Option<AuthCtx>);

impl FromRequestParts<AppState> for MaybeAuthCtx
where
    AppState: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthCtx(parts.extensions.get::<AuthCtx>().cloned()))
    }
}
