/*!
 * Authentication context extractor
 *
 * Responsibility:
 * - 検証済みリクエストのコンテキスト（AuthCtx）を handler に提供する
 * - HTTP / axum 依存は core に閉じ込め、型定義は types に分離する
 *
 * Public API:
 * - AuthCtx
 * - MaybeAuthCtx
 */

mod core;
mod types;

pub use core::MaybeAuthCtx;
pub use types::AuthCtx;
