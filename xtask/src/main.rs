//! Build automation tasks for the Bavarian arcade pair
//!
//! Usage:
//!   cargo xtask gen-assets            # Bake sprite PNGs to assets/generated
//!   cargo xtask gen-assets --out DIR  # Bake them somewhere else

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Build automation for the Bavarian arcade pair")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bake every procedural sprite to a PNG file
    GenAssets {
        /// Output directory (defaults to assets/generated in the repo)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::GenAssets { out } => gen_assets(out),
    }
}

/// Get the project root directory
fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .to_path_buf()
}

fn gen_assets(out: Option<PathBuf>) -> Result<()> {
    let dir = out.unwrap_or_else(|| project_root().join("assets/generated"));
    mug_run::sprites::write_all(&dir)
        .with_context(|| format!("writing sprites to {}", dir.display()))?;
    println!("Assets written to {}", dir.display());
    Ok(())
}
