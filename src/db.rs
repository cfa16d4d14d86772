use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use jiff::Timestamp;
use serde::de::DeserializeOwned;

use crate::error::{BoardError, Result};
use crate::id::IdGen;
use crate::models::{Comment, Post};

pub const POSTS_FILE: &str = "posts.json";
pub const FAVORITES_FILE: &str = "favorites.json";

/// Atomically write content to a file using a temporary file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let temp = path.with_extension("json.tmp");
    let mut file = File::create(&temp)?;
    file.lock_exclusive()?;
    file.write_all(content)?;
    file.sync_all()?;
    file.unlock()?;
    fs::rename(&temp, path)?;
    Ok(())
}

/// The board: every post on it plus the reader's favorites, mirrored to two
/// JSON files in the `.plaza/` directory. Each mutation rewrites both files
/// in full before returning, so a reopened board always matches what the
/// last successful operation left behind.
pub struct Board {
    path: PathBuf,
    posts: Vec<Post>,
    favorites: Vec<i64>,
    post_ids: IdGen,
    comment_ids: IdGen,
    recovered: bool,
}

impl Board {
    /// Open the board stored in the given directory. Missing data files mean
    /// an empty board; unreadable or malformed ones are dropped in favor of
    /// an empty collection and flagged via `recovered_from_corrupt`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.is_dir() {
            return Err(BoardError::NotInitialized(path));
        }

        let mut recovered = false;
        let posts: Vec<Post> = load_or_default(&path.join(POSTS_FILE), &mut recovered);
        let favorites: Vec<i64> = load_or_default(&path.join(FAVORITES_FILE), &mut recovered);

        // Seed the generators past everything already on disk so ids keep
        // strictly increasing across restarts.
        let max_post_id = posts.iter().map(|p| p.id).max().unwrap_or(0);
        let max_comment_id = posts
            .iter()
            .flat_map(|p| &p.comments)
            .map(|c| c.id)
            .max()
            .unwrap_or(0);

        Ok(Self {
            path,
            posts,
            favorites,
            post_ids: IdGen::seeded(max_post_id),
            comment_ids: IdGen::seeded(max_comment_id),
            recovered,
        })
    }

    /// Write out the (possibly empty) data files. Used by `init` so a fresh
    /// board is visible on disk before the first post.
    pub fn init_files(&self) -> Result<()> {
        self.save()
    }

    /// The base path for the `.plaza/` directory.
    pub fn base_path(&self) -> &Path {
        &self.path
    }

    /// True when stored data was present but unparseable at open and the
    /// board fell back to an empty collection.
    pub fn recovered_from_corrupt(&self) -> bool {
        self.recovered
    }

    fn save(&self) -> Result<()> {
        let posts = serde_json::to_vec_pretty(&self.posts)?;
        atomic_write(&self.path.join(POSTS_FILE), &posts).map_err(BoardError::StorageWrite)?;

        let favorites = serde_json::to_vec_pretty(&self.favorites)?;
        atomic_write(&self.path.join(FAVORITES_FILE), &favorites)
            .map_err(BoardError::StorageWrite)?;

        Ok(())
    }

    // Post operations

    /// Create a post and insert it at the front (newest first). Title and
    /// content are trimmed and must be non-empty.
    pub fn create_post(&mut self, title: &str, content: &str) -> Result<Post> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() {
            return Err(BoardError::InvalidArgument("title"));
        }
        if content.is_empty() {
            return Err(BoardError::InvalidArgument("content"));
        }

        let post = Post {
            id: self.post_ids.next(),
            title: title.to_owned(),
            content: content.to_owned(),
            comments: Vec::new(),
            likes: 0,
            created_at: Timestamp::now(),
        };

        self.posts.insert(0, post);
        if let Err(err) = self.save() {
            self.posts.remove(0);
            return Err(err);
        }

        Ok(self.posts[0].clone())
    }

    pub fn get(&self, post_id: i64) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Append a comment to the given post. Comments are append-only: there
    /// is no edit or delete.
    pub fn add_comment(&mut self, post_id: i64, text: &str) -> Result<Post> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BoardError::InvalidArgument("comment text"));
        }

        let idx = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or(BoardError::NotFound(post_id))?;

        self.posts[idx].comments.push(Comment {
            id: self.comment_ids.next(),
            text: text.to_owned(),
            created_at: Timestamp::now(),
        });

        if let Err(err) = self.save() {
            self.posts[idx].comments.pop();
            return Err(err);
        }

        Ok(self.posts[idx].clone())
    }

    /// Increment the like counter. Likes only go up; there is no unlike.
    pub fn like(&mut self, post_id: i64) -> Result<Post> {
        let idx = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or(BoardError::NotFound(post_id))?;

        self.posts[idx].likes += 1;
        if let Err(err) = self.save() {
            self.posts[idx].likes -= 1;
            return Err(err);
        }

        Ok(self.posts[idx].clone())
    }

    // Favorites

    /// Toggle set membership for the given id and report the new state.
    /// Favorites are independent of post existence, so an unknown id is
    /// accepted and persisted rather than rejected.
    pub fn toggle_favorite(&mut self, post_id: i64) -> Result<bool> {
        let removed_at = self.favorites.iter().position(|&id| id == post_id);
        match removed_at {
            Some(idx) => {
                self.favorites.remove(idx);
            }
            None => self.favorites.push(post_id),
        }

        if let Err(err) = self.save() {
            match removed_at {
                Some(idx) => self.favorites.insert(idx, post_id),
                None => {
                    self.favorites.pop();
                }
            }
            return Err(err);
        }

        Ok(removed_at.is_none())
    }

    pub fn favorites(&self) -> &[i64] {
        &self.favorites
    }

    pub fn is_favorite(&self, post_id: i64) -> bool {
        self.favorites.contains(&post_id)
    }

    // Search

    /// Case-insensitive substring search over title and content. A blank
    /// query returns every post; ordering always follows the collection.
    pub fn search(&self, query: &str) -> Vec<&Post> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.posts.iter().collect();
        }

        self.posts.iter().filter(|p| p.matches(&needle)).collect()
    }
}

/// Read a JSON data file, treating an absent file as an empty collection.
/// A file that exists but cannot be read or parsed is treated as corrupt:
/// the collection falls back to empty and `recovered` is set.
fn load_or_default<T: DeserializeOwned + Default>(path: &Path, recovered: &mut bool) -> T {
    match fs::read_to_string(path) {
        Ok(text) => match serde_json::from_str(&text) {
            Ok(value) => value,
            Err(_) => {
                *recovered = true;
                T::default()
            }
        },
        Err(err) if err.kind() == io::ErrorKind::NotFound => T::default(),
        Err(_) => {
            *recovered = true;
            T::default()
        }
    }
}
