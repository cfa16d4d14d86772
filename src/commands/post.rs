use anyhow::{Result, anyhow};

use crate::db::Board;
use crate::models::Post;

pub fn create(title: &str, content: &str, board: &mut Board) -> Result<Post> {
    Ok(board.create_post(title, content)?)
}

pub fn list(board: &Board) -> Vec<Post> {
    board.posts().to_vec()
}

pub fn show(post_id: i64, board: &Board) -> Result<Post> {
    board
        .get(post_id)
        .cloned()
        .ok_or_else(|| anyhow!("Post not found: {post_id}"))
}

pub fn search(query: &str, board: &Board) -> Vec<Post> {
    board.search(query).into_iter().cloned().collect()
}
