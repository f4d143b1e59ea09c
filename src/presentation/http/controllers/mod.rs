// src/presentation/http/controllers/mod.rs
pub mod auth;
pub mod health;
pub mod posts;
pub mod users;
