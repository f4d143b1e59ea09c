// src/application/ports/mod.rs
pub mod revocation;
pub mod security;
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type PasswordHasherPort = dyn security::PasswordHasher;
pub type TokenServicePort = dyn security::TokenService;
pub type RevocationStorePort = dyn revocation::RevocationStore;
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
