#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod id;
pub mod models;
pub mod output;

use anyhow::{Context, Result, anyhow};
use std::path::PathBuf;

use cli::{Cli, Commands, PostCommands};
use db::Board;
use output::Output;

pub const PLAZA_DIR: &str = ".plaza";

/// Finds the `.plaza/` directory by walking up from the current directory.
/// Returns `None` if no `.plaza/` directory is found.
pub fn find_plaza_dir() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    let mut dir = current_dir.as_path();

    loop {
        let plaza_path = dir.join(PLAZA_DIR);
        if plaza_path.is_dir() {
            return Some(plaza_path);
        }

        dir = dir.parent()?;
    }
}

fn ensure_initialized() -> Result<Board> {
    let plaza_dir =
        find_plaza_dir().ok_or_else(|| anyhow!("Plaza not initialized. Run 'plaza init' first."))?;

    let board = Board::open(&plaza_dir).context("Failed to open board")?;
    if board.recovered_from_corrupt() {
        eprintln!("Warning: stored board data was unreadable; starting from an empty board.");
    }
    Ok(board)
}

fn run_post(post_cmd: PostCommands, board: &mut Board) -> Result<()> {
    match post_cmd {
        PostCommands::Create {
            title,
            content,
            json,
        } => {
            let post = commands::post::create(&title, &content, board)?;
            Output::new(json).post_created(&post)
        }
        PostCommands::List { json } => {
            let posts = commands::post::list(board);
            Output::new(json).post_list(&posts, board.favorites())
        }
        PostCommands::Show { post_id, json } => {
            let post = commands::post::show(post_id, board)?;
            Output::new(json).post_show(&post, board.is_favorite(post_id))
        }
    }
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init => {
            let already = commands::init::run()?;
            Output::new(false).board_initialized(already)
        }
        Commands::Post(post_cmd) => {
            let mut board = ensure_initialized()?;
            run_post(post_cmd, &mut board)
        }
        Commands::Comment { post_id, text } => {
            let mut board = ensure_initialized()?;
            let post = commands::react::comment(post_id, &text, &mut board)?;
            Output::new(false).comment_added(&post)
        }
        Commands::Like { post_id } => {
            let mut board = ensure_initialized()?;
            let post = commands::react::like(post_id, &mut board)?;
            Output::new(false).post_liked(&post)
        }
        Commands::Fav { post_id } => {
            let mut board = ensure_initialized()?;
            let now_favorite = commands::react::favorite(post_id, &mut board)?;
            Output::new(false).favorite_toggled(post_id, now_favorite)
        }
        Commands::Search { query, json } => {
            let board = ensure_initialized()?;
            let results = commands::post::search(&query, &board);
            Output::new(json).search_results(&query, &results, board.favorites())
        }
    }
}
