pub mod password;
pub mod redis_revocation;
pub mod revocation;
pub mod token;

pub use password::Argon2PasswordHasher;
pub use redis_revocation::RedisRevocationStore;
pub use revocation::InMemoryRevocationStore;
pub use token::JwtTokenService;
