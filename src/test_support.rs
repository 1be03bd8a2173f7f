use crate::domain::model::{Comment, Company, Post, PostId, User, UserId};
use crate::domain::ports::PostsApi;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;

/// In-memory API that records every call it receives.
#[derive(Clone, Default)]
pub(crate) struct StubApi {
    users: Option<Vec<User>>,
    posts: HashMap<UserId, Vec<Post>>,
    comments: HashMap<PostId, Vec<Comment>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_user(mut self, id: UserId, name: &str, company: &str) -> Self {
        self.users.get_or_insert_with(Vec::new).push(user(id, name, company));
        self
    }

    pub(crate) fn with_post(mut self, id: PostId, user_id: UserId, title: &str) -> Self {
        self.posts.entry(user_id).or_default().push(Post {
            id,
            user_id,
            title: title.to_string(),
            body: format!("{} body", title),
        });
        self
    }

    pub(crate) fn with_comment(mut self, post_id: PostId, name: &str, email: &str) -> Self {
        self.comments.entry(post_id).or_default().push(Comment {
            id: None,
            post_id,
            name: name.to_string(),
            email: email.to_string(),
            body: format!("{} says hi", name),
        });
        self
    }

    pub(crate) async fn calls(&self) -> Vec<String> {
        self.calls.lock().await.clone()
    }

    async fn record(&self, call: String) {
        self.calls.lock().await.push(call);
    }
}

pub(crate) fn user(id: UserId, name: &str, company: &str) -> User {
    User {
        id,
        name: name.to_string(),
        username: None,
        email: None,
        company: Company {
            name: company.to_string(),
            catch_phrase: format!("{} catch phrase", company),
        },
    }
}

#[async_trait]
impl PostsApi for StubApi {
    async fn get_users(&self) -> Option<Vec<User>> {
        self.record("users".to_string()).await;
        self.users.clone()
    }

    async fn get_user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        self.record(format!("posts?userId={}", user_id)).await;
        self.posts.get(&user_id).cloned()
    }

    async fn get_user(&self, user_id: UserId) -> Option<User> {
        self.record(format!("users/{}", user_id)).await;
        self.users
            .as_ref()?
            .iter()
            .find(|user| user.id == user_id)
            .cloned()
    }

    async fn get_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        self.record(format!("comments?postId={}", post_id)).await;
        self.comments.get(&post_id).cloned()
    }
}
