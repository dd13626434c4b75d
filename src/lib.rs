/*
 * Responsibility
 * - crate 公開面: integration tests から router/state を組めるようにする
 * - ロジックは各モジュールに置く
 */
pub mod api;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod services;
pub mod state;
