use serde::{Deserialize, Serialize};

pub type UserId = u64;
pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub name: String,
    pub catch_phrase: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    pub company: Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default)]
    pub id: Option<u64>,
    pub post_id: PostId,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// How per-post author and comment lookups are scheduled while rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    /// One post at a time; author before comments.
    Sequential,
    /// Up to `limit` posts in flight; results are still consumed in API order.
    Concurrent { limit: usize },
}

impl Default for FetchMode {
    fn default() -> Self {
        Self::Sequential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_api_shape() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "address": {"city": "Gwenborough"},
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        });

        let user: User = serde_json::from_value(json).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.username.as_deref(), Some("Bret"));
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn test_post_and_comment_use_camel_case_keys() {
        let post: Post = serde_json::from_value(serde_json::json!({
            "userId": 1, "id": 101, "title": "t", "body": "b"
        }))
        .unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 101);

        let comment: Comment = serde_json::from_value(serde_json::json!({
            "postId": 101, "name": "n", "email": "e@x.io", "body": "b"
        }))
        .unwrap();
        assert_eq!(comment.post_id, 101);
        assert_eq!(comment.id, None);
    }
}
