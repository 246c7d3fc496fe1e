//! Best-score persistence for the endless runner
//!
//! A single number in a plain text file under the platform data
//! directory. Missing or unreadable files read as zero; write failures
//! are swallowed rather than interrupting the game-over screen.

use std::fs;
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
const APP_DIR: &str = "pretzel-dash";

/// Where the best score lives, when the platform has a data directory.
#[cfg(not(target_arch = "wasm32"))]
pub fn best_score_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join(APP_DIR).join("best_score"))
}

#[cfg(target_arch = "wasm32")]
pub fn best_score_path() -> Option<PathBuf> {
    None
}

pub fn load_best() -> u32 {
    best_score_path().map(|path| read_score(&path)).unwrap_or(0)
}

pub fn save_best(score: u32) {
    if let Some(path) = best_score_path() {
        write_score(&path, score);
    }
}

fn read_score(path: &Path) -> u32 {
    fs::read_to_string(path)
        .ok()
        .and_then(|text| text.trim().parse().ok())
        .unwrap_or(0)
}

fn write_score(path: &Path, score: u32) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let _ = fs::write(path, score.to_string());
}
