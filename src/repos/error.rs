/**
 * Responsibility
 * - store 実装が上位に伝える意味の定義
 * - retry 判断は呼び出し側 (この core は retry しない)
 */
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("db error")]
    Db(#[from] sqlx::Error),
}
