use crate::errors::{FetchError, StorageError};
use crate::favorites;
use crate::models::Post;
use std::collections::BTreeSet;

pub const FETCH_FAILED_NOTICE: &str = "Could not load the posts.";
pub const LOAD_FAILED_NOTICE: &str = "Could not load the favorites.";
pub const SAVE_FAILED_NOTICE: &str = "Could not save the favorite.";

/// Lifecycle of the fetched post list. A failed fetch is terminal for the
/// session: the list stays empty and the loading indicator never returns.
#[derive(Debug)]
pub enum PostsState {
    Loading,
    Loaded(Vec<Post>),
    Failed,
}

/// Favorites are unusable until the startup load resolves; toggling is only
/// reachable in the `Loaded` state.
#[derive(Debug)]
pub enum FavoritesState {
    Unloaded,
    Loaded(BTreeSet<u64>),
}

/// A one-shot interrupting notification. The next keypress dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
}

/// Single owner of everything the screen renders. The post source and the
/// favorites store stay stateless; their results flow in through the `on_*`
/// transitions.
pub struct App {
    pub posts: PostsState,
    pub favorites: FavoritesState,
    pub selected: usize,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            posts: PostsState::Loading,
            favorites: FavoritesState::Unloaded,
            selected: 0,
            notice: None,
            should_quit: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.posts, PostsState::Loading)
    }

    pub fn posts(&self) -> &[Post] {
        match &self.posts {
            PostsState::Loaded(posts) => posts,
            _ => &[],
        }
    }

    pub fn is_favorite(&self, id: u64) -> bool {
        match &self.favorites {
            FavoritesState::Loaded(set) => set.contains(&id),
            FavoritesState::Unloaded => false,
        }
    }

    pub fn on_posts_fetched(&mut self, result: Result<Vec<Post>, FetchError>) {
        match result {
            Ok(posts) => self.posts = PostsState::Loaded(posts),
            Err(err) => {
                log::warn!("Post fetch failed: {err}");
                self.posts = PostsState::Failed;
                self.notify(FETCH_FAILED_NOTICE);
            }
        }
    }

    pub fn on_favorites_loaded(&mut self, result: Result<BTreeSet<u64>, StorageError>) {
        match result {
            Ok(set) => self.favorites = FavoritesState::Loaded(set),
            Err(err) => {
                // Favorites stay Unloaded; the session continues without them.
                log::warn!("Favorites load failed: {err}");
                self.notify(LOAD_FAILED_NOTICE);
            }
        }
    }

    /// The in-memory set was already updated when the toggle happened; a
    /// failed persist only notifies.
    pub fn on_favorites_saved(&mut self, result: Result<(), StorageError>) {
        if let Err(err) = result {
            log::warn!("Favorites save failed: {err}");
            self.notify(SAVE_FAILED_NOTICE);
        }
    }

    /// Toggles the selected post's favorite in memory and returns the set to
    /// persist. `None` while favorites are unloaded or no post is selected.
    pub fn toggle_selected(&mut self) -> Option<BTreeSet<u64>> {
        let id = self.posts().get(self.selected)?.id;
        let FavoritesState::Loaded(set) = &mut self.favorites else {
            return None;
        };

        let next = favorites::toggle(std::mem::take(set), id);
        *set = next.clone();
        Some(next)
    }

    pub fn select_next(&mut self) {
        let len = self.posts().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Clears an open notification. Returns whether one was open, so the
    /// dismissing keypress is not also interpreted as a command.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }

    fn notify(&mut self, message: &str) {
        self.notice = Some(Notice {
            message: message.to_string(),
        });
    }
}
