use crate::domain::model::{Comment, Post, PostId, User, UserId};
use crate::domain::ports::{ConfigProvider, PostsApi};
use crate::utils::error::{BoardError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// [`PostsApi`] over HTTP against a JSONPlaceholder-shaped service.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!("Making API request to: {}", url);

        let response = self.client.get(&url).query(query).send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(BoardError::StatusError {
                url,
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn fetch_or_log<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Option<T> {
        match self.fetch_json(path, query).await {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::error!("Fetch failed for {}: {}", path, e);
                None
            }
        }
    }
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn get_users(&self) -> Option<Vec<User>> {
        self.fetch_or_log("/users", &[]).await
    }

    async fn get_user_posts(&self, user_id: UserId) -> Option<Vec<Post>> {
        if user_id == 0 {
            return None;
        }
        self.fetch_or_log("/posts", &[("userId", user_id.to_string())])
            .await
    }

    async fn get_user(&self, user_id: UserId) -> Option<User> {
        if user_id == 0 {
            return None;
        }
        self.fetch_or_log(&format!("/users/{}", user_id), &[]).await
    }

    async fn get_post_comments(&self, post_id: PostId) -> Option<Vec<Comment>> {
        if post_id == 0 {
            return None;
        }
        self.fetch_or_log("/comments", &[("postId", post_id.to_string())])
            .await
    }
}
