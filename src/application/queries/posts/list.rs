use super::PostQueryService;
use crate::application::{
    dto::{AuthenticatedUser, PostSummaryDto},
    error::ApplicationResult,
    queries::normalize_limit,
};

pub struct ListPostsQuery {
    pub limit: u32,
    pub offset: u32,
}

impl PostQueryService {
    /// Anonymous callers see published posts; authenticated callers also
    /// see their own drafts. Newest first.
    pub async fn list_posts(
        &self,
        actor: Option<&AuthenticatedUser>,
        query: ListPostsQuery,
    ) -> ApplicationResult<Vec<PostSummaryDto>> {
        let records = self
            .read_repo
            .list_visible(
                actor.map(|a| a.id),
                normalize_limit(query.limit),
                u64::from(query.offset),
            )
            .await?;

        Ok(records.into_iter().map(Into::into).collect())
    }
}
