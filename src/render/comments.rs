use crate::domain::model::{Comment, PostId};
use crate::domain::ports::PostsApi;
use crate::dom::{Document, NodeId};
use crate::render::builders::build_text_element;

pub const HIDDEN_CLASS: &str = "hide";

/// One `<article>` per comment, gathered in a fragment.
pub fn build_comments_fragment(doc: &mut Document, comments: Option<&[Comment]>) -> Option<NodeId> {
    let comments = comments?;
    let fragment = doc.create_fragment();
    for comment in comments {
        let article = doc.create_element("article");
        let heading = build_text_element(doc, Some("h3"), Some(&comment.name), None);
        let body = build_text_element(doc, Some("p"), Some(&comment.body), None);
        let from = format!("From: {}", comment.email);
        let email = build_text_element(doc, Some("p"), Some(&from), None);
        doc.append_all(article, &[heading, body, email]);
        doc.append(fragment, article);
    }
    Some(fragment)
}

/// Empty `<section class="comments hide">` tagged with the post id.
pub fn comments_section_shell(doc: &mut Document, post_id: PostId) -> NodeId {
    let section = doc.create_element("section");
    doc.set_data(section, "post_id", &post_id.to_string());
    doc.add_class(section, "comments");
    doc.add_class(section, HIDDEN_CLASS);
    section
}

/// Fills a section shell with already fetched comments. Missing comments
/// leave the section empty.
pub fn fill_comments_section(doc: &mut Document, section: NodeId, comments: Option<&[Comment]>) {
    match build_comments_fragment(doc, comments) {
        Some(fragment) => doc.append(section, fragment),
        None => tracing::warn!(
            "No comments available for post {}",
            doc.data(section, "post_id").unwrap_or("?")
        ),
    }
}

pub async fn build_comments_section<A>(
    doc: &mut Document,
    api: &A,
    post_id: PostId,
) -> Option<NodeId>
where
    A: PostsApi + ?Sized,
{
    if post_id == 0 {
        return None;
    }
    let section = comments_section_shell(doc, post_id);
    let comments = api.get_post_comments(post_id).await;
    fill_comments_section(doc, section, comments.as_deref());
    Some(section)
}
