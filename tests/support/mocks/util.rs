// tests/support/mocks/util.rs
use chrono::{DateTime, Utc};

/// `DummySlug::random_token` が常に返すトークン
pub const FIXED_RANDOM_TOKEN: &str = "r4nd0m42";

#[derive(Clone)]
pub struct DummyClock;

impl inkpress::application::ports::time::Clock for DummyClock {
    fn now(&self) -> DateTime<Utc> {
        // Use fixed time for deterministic tests
        super::time::fixed_now()
    }
}

/// 本番と同じ slug 正規化を行い、乱数トークンだけ固定するスラグ生成器
#[derive(Clone)]
pub struct DummySlug;

impl inkpress::application::ports::util::SlugGenerator for DummySlug {
    fn slugify(&self, input: &str) -> String {
        slug::slugify(input)
    }

    fn random_token(&self) -> String {
        FIXED_RANDOM_TOKEN.to_string()
    }
}
