use anyhow::Result;
use console::{Term, style};
use serde::Serialize;

use crate::models::Post;

pub struct Output {
    term: Term,
    json: bool,
}

impl Output {
    pub fn new(json: bool) -> Self {
        Self {
            term: Term::stdout(),
            json,
        }
    }

    fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let output = serde_json::to_string_pretty(value)?;
        self.term.write_line(&output)?;
        Ok(())
    }

    pub fn board_initialized(&self, already: bool) -> Result<()> {
        if already {
            self.term.write_line("Plaza already initialized here.")?;
        } else {
            self.term
                .write_line("Initialized an empty plaza board in .plaza/")?;
        }
        Ok(())
    }

    pub fn post_created(&self, post: &Post) -> Result<()> {
        if self.json {
            return self.print_json(post);
        }

        self.term.write_line(&format!(
            "{} {}",
            style("Created post:").green(),
            style(post.id).cyan().bold()
        ))?;
        self.term.write_line(&format!("  Title: {}", post.title))?;
        Ok(())
    }

    pub fn post_list(&self, posts: &[Post], favorites: &[i64]) -> Result<()> {
        if self.json {
            return self.print_json(posts);
        }

        if posts.is_empty() {
            self.term.write_line("No posts yet. Be the first to post.")?;
            return Ok(());
        }

        for post in posts {
            self.print_post_summary(post, favorites.contains(&post.id))?;
            self.term.write_line("")?;
        }
        Ok(())
    }

    fn print_post_summary(&self, post: &Post, favorite: bool) -> Result<()> {
        let marker = if favorite { " *" } else { "" };
        self.term.write_line(&format!(
            "{} {}{}",
            style(post.id).cyan().bold(),
            style(&post.title).bold(),
            style(marker).yellow()
        ))?;
        self.term.write_line(&format!(
            "  Posted: {}  |  {} like(s), {} comment(s)",
            post.created_at,
            post.likes,
            post.comments.len()
        ))?;
        Ok(())
    }

    pub fn post_show(&self, post: &Post, favorite: bool) -> Result<()> {
        if self.json {
            return self.print_json(post);
        }

        self.print_post_summary(post, favorite)?;
        self.term.write_line("")?;
        for line in textwrap::wrap(&post.content, 80) {
            self.term.write_line(&format!("  {line}"))?;
        }

        self.term.write_line("")?;
        if post.comments.is_empty() {
            self.term.write_line("No comments yet.")?;
            return Ok(());
        }

        self.term
            .write_line(&style("Comments:").bold().to_string())?;
        for comment in &post.comments {
            self.term.write_line(&format!(
                "  [{}] {}",
                style(&comment.created_at).dim(),
                comment.text
            ))?;
        }
        Ok(())
    }

    pub fn comment_added(&self, post: &Post) -> Result<()> {
        self.term.write_line(&format!(
            "{} {}",
            style("Added comment to post:").green(),
            style(post.id).cyan().bold()
        ))?;
        if let Some(comment) = post.comments.last() {
            self.term
                .write_line(&format!("  Comment: {}", comment.text))?;
        }
        self.term
            .write_line(&format!("  Total comments: {}", post.comments.len()))?;
        Ok(())
    }

    pub fn post_liked(&self, post: &Post) -> Result<()> {
        self.term.write_line(&format!(
            "{} {}",
            style("Liked post:").green(),
            style(post.id).cyan().bold()
        ))?;
        self.term
            .write_line(&format!("  Likes: {}", post.likes))?;
        Ok(())
    }

    pub fn favorite_toggled(&self, post_id: i64, now_favorite: bool) -> Result<()> {
        if now_favorite {
            self.term.write_line(&format!(
                "{} {}",
                style("Saved post to favorites:").green(),
                style(post_id).cyan().bold()
            ))?;
        } else {
            self.term.write_line(&format!(
                "{} {}",
                style("Removed post from favorites:").yellow(),
                style(post_id).cyan().bold()
            ))?;
        }
        Ok(())
    }

    pub fn search_results(&self, query: &str, posts: &[Post], favorites: &[i64]) -> Result<()> {
        if self.json {
            return self.print_json(posts);
        }

        if posts.is_empty() {
            self.term
                .write_line(&format!("No posts matching '{query}'."))?;
            return Ok(());
        }

        self.term.write_line(&format!(
            "{} post(s) matching '{query}':",
            style(posts.len()).green().bold()
        ))?;
        self.term.write_line("")?;

        for post in posts {
            self.print_post_summary(post, favorites.contains(&post.id))?;
            self.term.write_line("")?;
        }
        Ok(())
    }
}
