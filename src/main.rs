use clap::Parser;
use taskdeck::cli::commands::Cli;
use taskdeck::io::{config_io, logging};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = config_io::load_config(cli.config.as_deref(), &cwd)?;
    logging::init_logging(&config.log, cli.log_file.as_deref())?;

    let workspace = taskdeck::tui::run(&config)?;

    if cli.dump_json {
        println!("{}", serde_json::to_string_pretty(&workspace.snapshot())?);
    }
    Ok(())
}
