use anyhow::Result;

use crate::db::Board;
use crate::models::Post;

pub fn comment(post_id: i64, text: &str, board: &mut Board) -> Result<Post> {
    Ok(board.add_comment(post_id, text)?)
}

pub fn like(post_id: i64, board: &mut Board) -> Result<Post> {
    Ok(board.like(post_id)?)
}

/// Toggle favorite membership. Returns whether the post is now favorited.
pub fn favorite(post_id: i64, board: &mut Board) -> Result<bool> {
    Ok(board.toggle_favorite(post_id)?)
}
