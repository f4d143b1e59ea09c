// tests/support/mocks/mod.rs
//! テストサポートモック再エクスポートモジュール
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod repos;
pub mod security;
pub mod time;
pub mod util;

/* -------------------------------- 再エクスポート -------------------------------- */

// 時刻関連
pub use time::fixed_now;

// セキュリティ関連
pub use security::DummyPasswordHasher;

// リポジトリ関連
pub use repos::InMemoryStore;

// ユーティリティ関連
pub use util::{DummyClock, DummySlug, FIXED_RANDOM_TOKEN};
