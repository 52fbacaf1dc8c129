use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "td", about = concat!("taskdeck v", env!("CARGO_PKG_VERSION"), " - projects and tasks, in memory"), version)]
pub struct Cli {
    /// Config file (default: ./taskdeck.toml if present)
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides [log] file)
    #[arg(long = "log-file")]
    pub log_file: Option<PathBuf>,

    /// Print the final projects and tasks as JSON on exit
    #[arg(long = "dump-json")]
    pub dump_json: bool,
}
