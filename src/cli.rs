use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "plaza")]
#[command(about = "A tiny local forum board in your terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a plaza board in the current directory
    Init,

    /// Manage posts
    #[command(subcommand)]
    Post(PostCommands),

    /// Add a comment to a post
    Comment {
        /// The post id to comment on
        post_id: i64,

        /// The comment text
        text: String,
    },

    /// Like a post
    Like {
        /// The post id to like
        post_id: i64,
    },

    /// Toggle a post in your favorites
    Fav {
        /// The post id to toggle
        post_id: i64,
    },

    /// Search posts by title or content
    Search {
        /// The query, matched case-insensitively as a substring
        query: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PostCommands {
    /// Create a new post
    Create {
        /// The post title
        title: String,

        /// The post content
        content: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List all posts, newest first
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a post with its comments
    Show {
        /// The post id to show
        post_id: i64,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
