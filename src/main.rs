use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

mod commands;

#[derive(Parser)]
#[command(name = "docsmith")]
#[command(author, version, about = "Build a static documentation site from markdown", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Show debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only print errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render every markdown file in the docs directory into HTML pages
    Build(BuildArgs),

    /// Transform a single markdown file (or stdin) and print the HTML fragment
    Render {
        /// Markdown file to render; `-` or omitted reads stdin
        file: Option<PathBuf>,
    },

    /// Print the page title a markdown file would get
    Title {
        /// Markdown file to inspect
        file: PathBuf,
    },

    /// Create a default docsmith.toml
    Init {
        /// Target file or directory (defaults to ./docsmith.toml)
        path: Option<PathBuf>,
    },

    /// List the rewrite stages in execution order
    Stages,
}

#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    /// Configuration file path (defaults to ./docsmith.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the markdown sources
    #[arg(long)]
    docs: Option<PathBuf>,

    /// Output directory for generated pages
    #[arg(long)]
    out: Option<PathBuf>,

    /// Static home page copied into the output directory
    #[arg(long, conflicts_with = "no_home")]
    home: Option<PathBuf>,

    /// Skip copying a home page
    #[arg(long)]
    no_home: bool,
}

fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match &cli.command {
        Commands::Build(args) => commands::build::handle_build(args, cli.quiet),
        Commands::Render { file } => commands::render::handle_render(file.as_deref()),
        Commands::Title { file } => commands::title::handle_title(file),
        Commands::Init { path } => commands::init::handle_init(path.as_deref(), cli.quiet),
        Commands::Stages => commands::stages::handle_stages(),
    }
}
