//! CLI entry point for sapling

use std::path::PathBuf;
use std::process;

use clap::Parser;
use sapling::{
    OutputConfig, TreeFormatter, TreeWalker, WalkerConfig, print_confirmation, should_use_color,
    write_output,
};
use tracing::{Level, debug};

#[derive(Parser, Debug)]
#[command(name = "sapling")]
#[command(about = "Write the TypeScript source tree of the current directory to project_structure.txt")]
#[command(version)]
struct Args {
    /// Log traversal details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn setup_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .compact()
        .init();
}

/// Directory to scan: the working directory, canonicalized when possible.
fn scan_root() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("sapling: cannot determine current directory: {}", e);
        process::exit(1);
    });
    cwd.canonicalize().unwrap_or(cwd)
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);

    let root = scan_root();
    let walker = TreeWalker::new(WalkerConfig::default());
    let output_config = OutputConfig {
        use_color: should_use_color(),
        ..Default::default()
    };

    let tree = match walker.walk(&root) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("sapling: cannot scan '{}': {}", root.display(), e);
            process::exit(1);
        }
    };
    debug!(
        directories = tree.dir_count(),
        files = tree.file_count(),
        "scan complete"
    );

    let contents = TreeFormatter::new().format(&root, &tree);
    let output_path = root.join(&output_config.file_name);
    if let Err(e) = write_output(&output_path, &contents) {
        eprintln!(
            "sapling: error writing output '{}': {}",
            output_path.display(),
            e
        );
        process::exit(1);
    }

    if let Err(e) = print_confirmation(&output_path, output_config.use_color) {
        eprintln!("sapling: error writing to stdout: {}", e);
        process::exit(1);
    }
}
