/*
 * Responsibility
 * - Handler から見える「認証済みコンテキスト」の型
 * - middleware が検証して request extensions に格納し、handler はこの型だけを受け取る
 *
 * Notes
 * - JWT の検証ロジックは middleware/services 側の責務
 * - ここは「型（契約）」として固定化する
 */

use crate::services::authz::AuthContext;

/// 検証済みリクエストに付与されるコンテキスト
///
/// - `subject_id` は identity 層が検証した opaque な識別子 (正規化しない)
/// - middleware は検証成功時にだけこれを extensions に入れるので、
///   存在 = 認証済み。未認証のバリアントはテスト用 double が担う。
#[derive(Debug, Clone)]
pub struct AuthCtx {
    subject_id: String,
}

impl AuthCtx {
    pub fn new(subject_id: impl Into<String>) -> Self {
        Self {
            subject_id: subject_id.into(),
        }
    }
}

impl AuthContext for AuthCtx {
    fn is_authenticated(&self) -> bool {
        true
    }

    fn subject_id(&self) -> &str {
        &self.subject_id
    }
}
