use anyhow::{Context, Result};
use std::fs;

use crate::PLAZA_DIR;
use crate::db::Board;

pub fn run() -> Result<bool> {
    let plaza_dir = std::path::PathBuf::from(PLAZA_DIR);

    if plaza_dir.exists() {
        return Ok(true);
    }

    fs::create_dir_all(&plaza_dir).context("Failed to create .plaza directory")?;

    let board = Board::open(&plaza_dir)?;
    board.init_files()?;

    Ok(false)
}
