use crate::error::{CoreError, LookupKind};
use crate::models::Post;

/// Sub-store for the social feed. Order is fixed by seed/storage order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedStore {
    posts: Vec<Post>,
}

impl FeedStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    // ===== Getters =====

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Result<&Post, CoreError> {
        self.posts
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found(LookupKind::Post, id))
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    // ===== Mutations =====

    /// Flip the viewer's like on `id`. Applying it twice restores the post.
    pub fn toggle_like(&mut self, id: &str) -> Result<&Post, CoreError> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| CoreError::not_found(LookupKind::Post, id))?;
        post.toggle_like();
        Ok(post)
    }
}
