// src/cli.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "portfolio_site")]
#[command(about = "Portfolio and blog site backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,

    /// Populate the database with sample data; safe to run repeatedly
    Seed,

    /// Store an image (at most 5MB) as the profile picture
    UploadProfileImage {
        /// Path of the image file
        path: PathBuf,
    },
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}
