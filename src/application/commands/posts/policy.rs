use crate::application::dto::AuthenticatedUser;
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::post::Post;

/// Only the author may mutate a post. Drafts the actor cannot see are
/// reported as missing rather than forbidden.
pub(super) fn ensure_author(actor: &AuthenticatedUser, post: &Post) -> ApplicationResult<()> {
    if !post.visible_to(Some(actor.id)) {
        return Err(ApplicationError::not_found("post not found"));
    }
    if post.author_id != actor.id {
        return Err(ApplicationError::forbidden(
            "you can only modify your own posts",
        ));
    }
    Ok(())
}
