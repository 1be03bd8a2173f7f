use crate::domain::model::{Comment, FetchMode, Post, User};
use crate::domain::ports::PostsApi;
use crate::dom::{Document, NodeId};
use crate::render::builders::build_text_element;
use crate::render::comments::{
    build_comments_section, comments_section_shell, fill_comments_section,
};
use crate::utils::error::{BoardError, Result};
use futures_util::stream::{self, StreamExt};

pub const SHOW_COMMENTS: &str = "Show Comments";
pub const HIDE_COMMENTS: &str = "Hide Comments";
pub const DEFAULT_TEXT_CLASS: &str = "default-text";
pub const SELECT_PROMPT: &str = "Select an Employee to display their posts.";
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// Author and comments fetched ahead of rendering for one post.
#[derive(Debug)]
struct PostDetails {
    author: Option<User>,
    comments: Option<Vec<Comment>>,
}

async fn fetch_post_details<A>(api: &A, post: &Post) -> PostDetails
where
    A: PostsApi + ?Sized,
{
    // Author strictly before comments for the same post.
    let author = api.get_user(post.user_id).await;
    let comments = if post.id == 0 {
        None
    } else {
        api.get_post_comments(post.id).await
    };
    PostDetails { author, comments }
}

fn build_post_article(
    doc: &mut Document,
    post: &Post,
    author: Option<&User>,
    section: Option<NodeId>,
) -> NodeId {
    let article = doc.create_element("article");
    let title = build_text_element(doc, Some("h2"), Some(&post.title), None);
    let body = build_text_element(doc, Some("p"), Some(&post.body), None);
    let id_label = format!("Post ID: {}", post.id);
    let post_id = build_text_element(doc, Some("p"), Some(&id_label), None);

    let (author_line, catch_phrase) = match author {
        Some(author) => (
            format!("Author: {} with {}", author.name, author.company.name),
            author.company.catch_phrase.clone(),
        ),
        None => {
            tracing::warn!(
                "Author {} for post {} could not be loaded",
                post.user_id,
                post.id
            );
            (format!("Author: {}", UNKNOWN_AUTHOR), String::new())
        }
    };
    let author = build_text_element(doc, Some("p"), Some(&author_line), None);
    let phrase = build_text_element(doc, Some("p"), Some(&catch_phrase), None);

    let button = build_text_element(doc, Some("button"), Some(SHOW_COMMENTS), None);
    doc.set_data(button, "post_id", &post.id.to_string());

    doc.append_all(article, &[title, body, post_id, author, phrase, button]);
    if let Some(section) = section {
        doc.append(article, section);
    }
    article
}

/// Renders every post into a fragment, in the order the API returned them.
pub async fn build_posts_fragment<A>(
    doc: &mut Document,
    api: &A,
    posts: Option<&[Post]>,
    mode: FetchMode,
) -> Option<NodeId>
where
    A: PostsApi + ?Sized,
{
    let posts = posts?;
    let fragment = doc.create_fragment();

    match mode {
        FetchMode::Sequential => {
            for post in posts {
                let author = api.get_user(post.user_id).await;
                let section = build_comments_section(doc, api, post.id).await;
                let article = build_post_article(doc, post, author.as_ref(), section);
                doc.append(fragment, article);
            }
        }
        FetchMode::Concurrent { limit } => {
            tracing::debug!(
                "Fetching details for {} posts with up to {} in flight",
                posts.len(),
                limit
            );
            let details: Vec<PostDetails> = stream::iter(posts)
                .map(|post| fetch_post_details(api, post))
                .buffered(limit.max(1))
                .collect()
                .await;
            for (post, details) in posts.iter().zip(details) {
                let section = (post.id != 0).then(|| {
                    let section = comments_section_shell(doc, post.id);
                    fill_comments_section(doc, section, details.comments.as_deref());
                    section
                });
                let article = build_post_article(doc, post, details.author.as_ref(), section);
                doc.append(fragment, article);
            }
        }
    }

    Some(fragment)
}

pub fn build_select_prompt(doc: &mut Document) -> NodeId {
    build_text_element(doc, Some("p"), Some(SELECT_PROMPT), Some(DEFAULT_TEXT_CLASS))
}

/// Appends the posts (or the selection prompt when there are none) to
/// `<main>` and returns what was appended.
pub async fn render_posts<A>(
    doc: &mut Document,
    api: &A,
    posts: Option<&[Post]>,
    mode: FetchMode,
) -> Result<NodeId>
where
    A: PostsApi + ?Sized,
{
    let main = doc
        .first_by_tag("main")
        .ok_or_else(|| BoardError::missing_element("main"))?;

    let element = match posts.filter(|posts| !posts.is_empty()) {
        None => build_select_prompt(doc),
        Some(posts) => match build_posts_fragment(doc, api, Some(posts), mode).await {
            Some(fragment) => fragment,
            None => build_select_prompt(doc),
        },
    };

    doc.append(main, element);
    Ok(element)
}
