use anyhow::Result;
use clap::{CommandFactory, Parser};
use fsnap::areas::tracker::{ScanOptions, Tracker};
use fsnap::artifacts::filter::DEFAULT_INCLUDE;
use fsnap::artifacts::filter::path_filter::FilterSpec;
use fsnap::artifacts::hashing::hash_algorithm::HashAlgorithm;
use is_terminal::IsTerminal;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fsnap",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Snapshot a directory tree and find files that changed since",
    long_about = "Walks a directory tree and fingerprints the content of every selected file. \
    With --output the fingerprints are saved as a snapshot; with --db the tree is compared \
    against a previously saved snapshot and every added, removed or modified file is listed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    fsnap -d <PATH> -o <FILE> [--filter <REGEX>] [--not-filter <REGEX>]
    fsnap -d <PATH> --db <FILE> [--filter <REGEX>] [--not-filter <REGEX>]

OPTIONS:
{options}
"
)]
struct Cli {
    #[arg(short = 'd', long = "dir", value_name = "PATH", help = "File or folder to walk")]
    dir: Option<PathBuf>,
    #[arg(short, long, value_name = "FILE", help = "Create a snapshot at this location")]
    output: Option<PathBuf>,
    #[arg(long, value_name = "FILE", help = "Compare against the snapshot at this location")]
    db: Option<PathBuf>,
    #[arg(
        long,
        value_name = "REGEX",
        default_value = DEFAULT_INCLUDE,
        help = "Only paths matching this case-insensitive pattern are hashed"
    )]
    filter: String,
    #[arg(
        long = "not-filter",
        value_name = "REGEX",
        help = "Paths matching this case-insensitive pattern are never hashed"
    )]
    not_filter: Option<String>,
    #[arg(
        long,
        value_enum,
        default_value_t = HashAlgorithm::Sha256,
        help = "Digest algorithm used when creating a snapshot"
    )]
    algorithm: HashAlgorithm,
    #[arg(short, long, value_name = "N", help = "Number of files hashed concurrently")]
    jobs: Option<NonZeroUsize>,
    #[arg(long, help = "Print every hashed path with its digest")]
    debug: bool,
}

enum Mode {
    Create { root: PathBuf, output: PathBuf },
    Compare { root: PathBuf, source: PathBuf },
}

impl Cli {
    /// A root plus exactly one of output/db selects a pipeline
    fn mode(&self) -> Option<Mode> {
        match (&self.dir, &self.output, &self.db) {
            (Some(root), Some(output), None) => Some(Mode::Create {
                root: root.clone(),
                output: output.clone(),
            }),
            (Some(root), None, Some(source)) => Some(Mode::Compare {
                root: root.clone(),
                source: source.clone(),
            }),
            _ => None,
        }
    }

    fn scan_options(&self) -> ScanOptions {
        let defaults = ScanOptions::default();

        ScanOptions::new(
            FilterSpec::new(self.filter.clone(), self.not_filter.clone()),
            self.algorithm,
            self.jobs.unwrap_or(defaults.jobs),
            self.debug,
        )
    }
}

fn init_logging(debug: bool) {
    let default_directive = if debug { "fsnap=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            Cli::command().print_help()?;
            return Ok(());
        }
        Err(e) => {
            // --help and --version
            e.print()?;
            return Ok(());
        }
    };

    let Some(mode) = cli.mode() else {
        Cli::command().print_help()?;
        return Ok(());
    };

    init_logging(cli.debug);
    colored::control::set_override(std::io::stdout().is_terminal());

    match mode {
        Mode::Create { root, output } => {
            let tracker = Tracker::new(&root, cli.scan_options(), Box::new(std::io::stdout()))?;
            tracker.create(&output).await?;
        }
        Mode::Compare { root, source } => {
            let tracker = Tracker::new(&root, cli.scan_options(), Box::new(std::io::stdout()))?;
            tracker.compare(&source).await?;
        }
    }

    Ok(())
}
