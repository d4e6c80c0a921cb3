use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Default, Parser)]
#[command(name = "stockroom")]
#[command(about = "A menu-driven store inventory.")]
pub struct CommandLine {
    /// JSON catalog to stock the store with
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Header shown above the menu
    #[arg(long)]
    pub store_name: Option<String>,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
