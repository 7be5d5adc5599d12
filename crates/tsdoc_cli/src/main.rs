use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod docs;

#[derive(Parser, Debug)]
#[command(name = "tsdoc-md")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate a Markdown API reference from TypeScript sources")]
#[command(long_about = "Documents every exported class, interface and type alias of the given \
    TypeScript files. Directories are walked for .ts, .tsx, .mts and .cts files in sorted order; \
    the documents of all inputs are joined by a blank line.")]
pub struct Args {
    /// TypeScript files or directories to document
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Do not print extends / implements clauses
    #[arg(long)]
    pub no_heritage: bool,

    /// Show debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    docs::run(&args)
}
