use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use video_console::library::{Catalog, LibraryManager};
use video_console::{repl, seed};

#[derive(Parser, Debug)]
#[command(name = "video-console")]
#[command(about = "Interactive console for a small video library", long_about = None)]
struct Args {
    /// Path to a pipe-delimited catalog file (built-in demo catalog if omitted)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in the catalog path and load the seed data
    let videos = match &args.catalog {
        Some(path) => {
            let catalog_path = shellexpand::tilde(path);
            seed::parse_catalog_file(PathBuf::from(catalog_path.as_ref()).as_path())?
        }
        None => seed::default_catalog(),
    };

    let catalog = Catalog::from_seed(videos);
    log::info!("Catalog loaded: {} videos", catalog.len());

    let mut manager = LibraryManager::new(catalog);

    let stdin = io::stdin();
    let stdout = io::stdout();
    repl::run(&mut manager, stdin.lock(), stdout.lock())?;

    Ok(())
}
