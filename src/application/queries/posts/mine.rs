use super::PostQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PostSummaryDto},
    error::ApplicationResult,
    queries::normalize_limit,
};

pub struct MyPostsQuery {
    pub limit: u32,
    pub offset: u32,
}

impl PostQueryService {
    /// Everything the caller has written, drafts included.
    pub async fn my_posts(
        &self,
        actor: &AuthenticatedUser,
        query: MyPostsQuery,
    ) -> ApplicationResult<Vec<PostSummaryDto>> {
        let records = self
            .read_repo
            .list_by_author(
                actor.id,
                normalize_limit(query.limit),
                u64::from(query.offset),
            )
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
