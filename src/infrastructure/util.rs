use crate::application::ports::util::SlugGenerator;
use slug::slugify;
use uuid::Uuid;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }

    fn random_token(&self) -> String {
        let mut token = Uuid::new_v4().simple().to_string();
        token.truncate(8);
        token
    }
}
