use crate::core::{ConfigProvider, FetchMode, Post, PostId, PostsApi, User, UserId};
use crate::dom::{Document, NodeId, SELECT_MENU_ID};
use crate::render::builders::populate_select_menu;
use crate::render::posts::{build_select_prompt, render_posts};
use crate::ui::events::ChangeEvent;
use crate::ui::listeners::ListenerManager;
use crate::ui::toggle::Toggled;
use crate::utils::error::{BoardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    Idle,
    LoadingUsers,
    Ready,
    LoadingUserPosts,
}

/// What one refresh of `<main>` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub detached: Vec<NodeId>,
    pub main: NodeId,
    pub rendered: NodeId,
    pub attached: Vec<NodeId>,
}

/// Result of handling a select menu change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub user_id: UserId,
    pub posts: Option<Vec<Post>>,
    pub refresh: Option<RefreshOutcome>,
}

/// The page: its document, the API it reads from and the button listeners.
pub struct PostBoard<A: PostsApi> {
    document: Document,
    api: A,
    listeners: ListenerManager,
    state: PageState,
    change_listener_armed: bool,
    fallback_user_id: UserId,
    fetch_mode: FetchMode,
}

impl<A: PostsApi> PostBoard<A> {
    pub fn new<C: ConfigProvider>(api: A, config: &C) -> Self {
        Self::with_document(Document::new(), api, config)
    }

    pub fn with_document<C: ConfigProvider>(document: Document, api: A, config: &C) -> Self {
        Self {
            document,
            api,
            listeners: ListenerManager::new(),
            state: PageState::Idle,
            change_listener_armed: false,
            fallback_user_id: config.fallback_user_id(),
            fetch_mode: config.fetch_mode(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn listeners(&self) -> &ListenerManager {
        &self.listeners
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    fn select_menu(&self) -> Result<NodeId> {
        self.document
            .get_element_by_id(SELECT_MENU_ID)
            .ok_or_else(|| BoardError::missing_element(format!("#{}", SELECT_MENU_ID)))
    }

    fn main(&self) -> Result<NodeId> {
        self.document
            .first_by_tag("main")
            .ok_or_else(|| BoardError::missing_element("main"))
    }

    /// Loads the employees into the select menu and starts listening for
    /// selections.
    pub async fn initialize_app(&mut self) -> Result<Option<Vec<User>>> {
        self.select_menu()?;
        self.state = PageState::LoadingUsers;
        tracing::info!("Loading employees");

        let users = self.api.get_users().await;
        match populate_select_menu(&mut self.document, users.as_deref()) {
            Some(_) => tracing::info!(
                "Loaded {} employees",
                users.as_ref().map(Vec::len).unwrap_or_default()
            ),
            None => tracing::warn!("No employees available for the select menu"),
        }

        self.change_listener_armed = true;
        self.state = PageState::Ready;
        Ok(users)
    }

    /// Puts the selection prompt into an empty `<main>`.
    pub fn display_initial_prompt(&mut self) -> Result<Option<NodeId>> {
        let main = self.main()?;
        if !self.document.children(main).is_empty() {
            return Ok(None);
        }
        let prompt = build_select_prompt(&mut self.document);
        self.document.append(main, prompt);
        Ok(Some(prompt))
    }

    fn resolve_user_id(&self, event: &ChangeEvent) -> UserId {
        event
            .value
            .as_deref()
            .and_then(|value| value.trim().parse::<UserId>().ok())
            .filter(|id| *id != 0)
            .unwrap_or(self.fallback_user_id)
    }

    /// Handles a select menu change. Returns `None` when there is no event,
    /// the page is not initialized, or a refresh is already running.
    pub async fn on_user_selected(
        &mut self,
        event: Option<&ChangeEvent>,
    ) -> Result<Option<Selection>> {
        let Some(event) = event else {
            return Ok(None);
        };
        let select = self.select_menu()?;
        if !self.change_listener_armed {
            tracing::debug!("Selection ignored: page not initialized");
            return Ok(None);
        }
        if self.document.is_disabled(select) {
            tracing::debug!("Selection ignored: refresh in progress");
            return Ok(None);
        }

        self.document.set_disabled(select, true);
        self.state = PageState::LoadingUserPosts;

        let user_id = self.resolve_user_id(event);
        tracing::info!("Loading posts for employee {}", user_id);
        let posts = self.api.get_user_posts(user_id).await;
        let refresh = self.refresh_displayed_posts(posts.as_deref()).await;

        self.document.set_disabled(select, false);
        self.state = PageState::Ready;

        Ok(Some(Selection {
            user_id,
            posts,
            refresh: refresh?,
        }))
    }

    /// Replaces the content of `<main>` with `posts`. Does nothing when no
    /// posts could be loaded.
    pub async fn refresh_displayed_posts(
        &mut self,
        posts: Option<&[Post]>,
    ) -> Result<Option<RefreshOutcome>> {
        let Some(posts) = posts else {
            tracing::warn!("No posts loaded; keeping the current content");
            return Ok(None);
        };

        let detached = self.listeners.detach_button_listeners(&self.document);
        let main = self.main()?;
        self.document.remove_all_children(main);
        let rendered =
            render_posts(&mut self.document, &self.api, Some(posts), self.fetch_mode).await?;
        let attached = self.listeners.attach_button_listeners(&self.document);
        tracing::debug!("Rendered {} posts", posts.len());

        Ok(Some(RefreshOutcome {
            detached,
            main,
            rendered,
            attached,
        }))
    }

    /// Clicks the "Show Comments" button of `post_id`.
    pub fn click_show_comments(&mut self, post_id: PostId) -> Option<Toggled> {
        let button = self
            .document
            .query_by_data_post_id("button", &post_id.to_string())?;
        self.listeners.dispatch_click(&mut self.document, button)
    }

    pub fn into_document(self) -> Document {
        self.document
    }
}
