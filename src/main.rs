//! CLI entry point for foldermap

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use foldermap::output::{DEFAULT_OUTPUT, OutputConfig};
use foldermap::{AnnotationTable, FolderMap, TreeConfig, print_map, write_map};
use tracing::{Level, debug};

#[derive(Parser, Debug)]
#[command(name = "foldermap")]
#[command(about = "Write an annotated ASCII tree of a directory into a Markdown file")]
#[command(version)]
struct Args {
    /// Root directory to map (default: current directory)
    directory: Option<PathBuf>,

    /// Output Markdown file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Include hidden files and directories
    #[arg(long = "no-ignore-hidden", action = ArgAction::SetFalse)]
    ignore_hidden: bool,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore")]
    ignore: Vec<String>,

    /// JSON file of name -> comment pairs, merged over the built-in table
    #[arg(short = 'a', long = "annotations", value_name = "FILE")]
    annotations: Option<PathBuf>,

    /// Do not use the built-in annotation table
    #[arg(long = "no-builtin-annotations")]
    no_builtin_annotations: bool,

    /// Print the map to stdout instead of writing the output file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Log progress to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn setup_tracing(verbose: u8) {
    let level = match verbose {
        0 => return,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact()
        .init();
}

fn load_annotations(args: &Args) -> std::io::Result<AnnotationTable> {
    let table = if args.no_builtin_annotations {
        AnnotationTable::empty()
    } else {
        AnnotationTable::builtin()
    };
    match &args.annotations {
        Some(path) => {
            let extra = AnnotationTable::load(path)?;
            debug!(path = %path.display(), entries = extra.len(), "loaded annotations");
            Ok(table.merge(extra))
        }
        None => Ok(table),
    }
}

fn run(args: &Args) -> std::io::Result<()> {
    let annotations = load_annotations(args)?;
    if annotations.is_empty() {
        debug!("no annotations, lines will carry no comments");
    }

    let root = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let config = OutputConfig {
        title: args.output.display().to_string(),
        tree: TreeConfig {
            ignore_hidden: args.ignore_hidden,
            ignore_patterns: args.ignore.clone(),
        },
    };

    let map = FolderMap::build(&root, &config, &annotations)?;

    if args.stdout {
        return print_map(&map);
    }

    write_map(&map, &args.output)?;
    println!(
        "foldermap: wrote '{}' for {} (ignoring hidden: {})",
        args.output.display(),
        map.root().display(),
        args.ignore_hidden
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.verbose);
    debug!("Parsed CLI arguments: {args:?}");

    if let Err(e) = run(&args) {
        eprintln!("foldermap: error: {}", e);
        process::exit(1);
    }
}
