// tests/support/mocks/security.rs
use async_trait::async_trait;

/* -------------------------------- PasswordHasher -------------------------------- */

/// 実際の Argon2 をスキップする高速なハッシャー。`hashed::<平文>` 形式の
/// 擬似ハッシュを生成し、照合はその形式との一致で判定する。ビルダーで
/// シードしたユーザーにも同じ形式を使うこと。
#[derive(Clone, Debug, Default)]
pub struct DummyPasswordHasher;

#[async_trait]
impl inkpress::application::ports::security::PasswordHasher for DummyPasswordHasher {
    async fn hash(&self, password: &str) -> inkpress::application::ApplicationResult<String> {
        Ok(format!("hashed::{password}"))
    }

    async fn verify(
        &self,
        password: &str,
        expected_hash: &str,
    ) -> inkpress::application::ApplicationResult<()> {
        if expected_hash == format!("hashed::{password}") {
            Ok(())
        } else {
            Err(inkpress::application::error::ApplicationError::unauthorized(
                "invalid credentials",
            ))
        }
    }
}
