// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;

    /// A short random token suitable for use inside a slug.
    fn random_token(&self) -> String;
}
