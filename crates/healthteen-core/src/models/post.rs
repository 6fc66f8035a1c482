use serde::{Deserialize, Serialize};

/// A social feed entry. Field names on disk follow the stored `posts` blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(rename = "user")]
    pub author: String,
    /// Relative age label such as "2h".
    #[serde(rename = "time")]
    pub posted_at: String,
    #[serde(rename = "content")]
    pub body: String,
    #[serde(rename = "likes")]
    pub like_count: u32,
    #[serde(rename = "comments")]
    pub comment_count: u32,
    #[serde(rename = "likedByUser")]
    pub liked_by_viewer: bool,
}

impl Post {
    /// Flip the viewer's like and move the counter by one. Never goes below zero.
    pub fn toggle_like(&mut self) {
        self.liked_by_viewer = !self.liked_by_viewer;
        if self.liked_by_viewer {
            self.like_count = self.like_count.saturating_add(1);
        } else {
            self.like_count = self.like_count.saturating_sub(1);
        }
    }
}
