use crate::domain::model::{Comment, FetchMode, Post, PostId, User, UserId};
use async_trait::async_trait;

/// Read-only access to the posts API.
///
/// Every accessor swallows its own failures: errors are logged and the call
/// resolves to `None`, which callers treat as "no data". An id of `0` is
/// treated as absent and short-circuits without a request.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn get_users(&self) -> Option<Vec<User>>;
    async fn get_user_posts(&self, user_id: UserId) -> Option<Vec<Post>>;
    async fn get_user(&self, user_id: UserId) -> Option<User>;
    async fn get_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn fallback_user_id(&self) -> UserId;
    fn fetch_mode(&self) -> FetchMode;
    fn timeout_seconds(&self) -> u64;
}
