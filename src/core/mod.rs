pub mod workflow;

pub use crate::domain::model::{Comment, FetchMode, Post, PostId, User, UserId};
pub use crate::domain::ports::{ConfigProvider, PostsApi};
pub use crate::utils::error::Result;
pub use workflow::{PageState, PostBoard, RefreshOutcome, Selection};
