pub mod posts;
pub mod users;

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

/// Listing endpoints take a plain limit/offset pair. A zero or absent limit
/// falls back to the default page size.
pub(crate) fn normalize_limit(limit: u32) -> u64 {
    let limit = if limit == 0 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    };
    u64::from(limit)
}
