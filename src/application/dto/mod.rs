pub mod auth;
pub mod posts;
pub mod users;

pub use auth::{
    AccessTokenData, AuthenticatedUser, IssuedAccess, IssuedTokenPair, RefreshTokenData,
    TokenPairDto,
};
pub use posts::{PostDto, PostSummaryDto};
pub use users::UserDto;
