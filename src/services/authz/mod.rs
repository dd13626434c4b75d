/*!
 * Self-service creation rule
 *
 * Responsibility:
 * - 「caller は自分自身の subject しか作れない」の判定を一箇所に閉じ込める
 * - HTTP/axum には依存しない純粋な判定関数 (handler から呼ぶ)
 *
 * Public API:
 * - AuthContext
 * - AuthorizedSubject
 * - AuthzOutcome
 * - authorize_self_create
 */

/// Per-request capability answering "is this caller authenticated?" and
/// "what is the caller's verified identity?".
///
/// The real implementation is produced by the bearer middleware
/// (`api::v1::extractors::AuthCtx`); tests supply their own doubles.
/// This layer trusts whatever `subject_id()` reports; verifying it is the
/// identity layer's responsibility.
pub trait AuthContext: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// Opaque identity handle, stable per authenticated principal.
    fn subject_id(&self) -> &str;
}

/// Proof that a declared subject id passed the self-service check.
///
/// The field is private and only `authorize_self_create` constructs this,
/// so a `Person` on the create path can only be built from an identity the
/// gate validated in the same request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedSubject(String);

impl AuthorizedSubject {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Three-way classification of a create request. There is no fourth state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthzOutcome {
    /// No verified identity on the request. Retrying without new
    /// credentials cannot succeed.
    Unauthenticated,
    /// Authenticated, but the payload declares someone else's identity.
    Forbidden,
    Authorized(AuthorizedSubject),
}

/// Decide whether a create request may proceed.
///
/// - `ctx = None` (nothing attached to the request) resolves to
///   `Unauthenticated`, same as a present-but-unauthenticated context.
///   Ambiguity must never resolve toward `Authorized`.
/// - For unauthenticated callers the declared subject is not inspected at
///   all, so the response leaks nothing about whether that identity exists.
/// - Identity comparison is exact string equality. No trimming, no
///   case-folding; normalization is the identity layer's problem.
pub fn authorize_self_create(
    ctx: Option<&dyn AuthContext>,
    declared_subject_id: &str,
) -> AuthzOutcome {
    let Some(ctx) = ctx else {
        return AuthzOutcome::Unauthenticated;
    };
    if !ctx.is_authenticated() {
        return AuthzOutcome::Unauthenticated;
    }

    if declared_subject_id != ctx.subject_id() {
        return AuthzOutcome::Forbidden;
    }

    AuthzOutcome::Authorized(AuthorizedSubject(declared_subject_id.to_string()))
}
