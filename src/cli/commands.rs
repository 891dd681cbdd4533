//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lj2hugo")]
#[command(about = "Convert LiveJournal XML exports to Hugo posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Entry export files to convert (e.g. L-1234)
    #[arg(value_name = "FILES", required = true)]
    pub paths: Vec<PathBuf>,

    /// Do not look for companion comment files
    #[arg(long)]
    pub skip_comments: bool,

    /// Include spam comments in output
    #[arg(short = 's', long)]
    pub spam: bool,

    /// Include banned-user comments in output
    #[arg(short = 'b', long)]
    pub banned: bool,

    /// Include deleted comments in output
    #[arg(short = 'd', long)]
    pub deleted: bool,
}
