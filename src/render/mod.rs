pub mod builders;
pub mod comments;
pub mod posts;

pub use builders::{build_select_options, build_text_element, populate_select_menu};
pub use comments::{build_comments_fragment, build_comments_section};
pub use posts::{build_posts_fragment, render_posts};
