use super::PostQueryService;
use crate::application::{dto::PostSummaryDto, error::ApplicationResult};

const RECENT_LIMIT: u64 = 10;

impl PostQueryService {
    /// The ten newest published posts, for front-page style widgets.
    pub async fn recent_posts(&self) -> ApplicationResult<Vec<PostSummaryDto>> {
        let records = self.read_repo.list_recent(RECENT_LIMIT).await?;
        Ok(records.into_iter().map(Into::into).collect())
    }
}
