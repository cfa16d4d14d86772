use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Comment;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub likes: i64,
    pub created_at: Timestamp,
}

impl Post {
    /// Case-insensitive substring match over title and content.
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.content.to_lowercase().contains(needle_lower)
    }
}
