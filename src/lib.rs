//! MUG-RUN: a Bavarian-themed arcade pair
//!
//! Two small side-scrolling games sharing one simulation toolkit:
//! - `mug-run`: jump-and-run through the festival grounds, collecting
//!   beer and pretzels while dodging waiters and police
//! - `pretzel-dash`: endless obstacle dash along the festival alley
//!
//! Sprites are painted procedurally; `cargo xtask gen-assets` bakes them
//! to PNG files which, when present, override the painters at runtime.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod assets;
pub mod geom;
pub mod input;
pub mod platformer;
pub mod runner;
pub mod score;
pub mod sprites;
