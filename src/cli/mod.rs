//! CLI module - Command-line interface for dwcheck
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// dwcheck - read-only catalog API for books, series and characters
#[derive(Parser)]
#[command(name = "dwcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API (default)
    Serve,

    /// Load the bundled seed data into the database
    Seed,

    /// Download cover art for books that have none stored
    #[command(name = "apply-cover-art", alias = "covers")]
    ApplyCoverArt,

    /// Write a default config.toml
    Init,
}

pub use commands::*;
