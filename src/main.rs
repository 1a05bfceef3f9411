use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use graphscope::analysis::{analyze, AnalysisConfig};
use graphscope::export::{export, ExportData, ExportFormat};
use graphscope::graph::SeedOrder;
use graphscope::parser::{self, sample, IndexBase, InputFormat, LabeledGraph};

#[derive(Parser)]
#[command(name = "graphscope")]
#[command(author = "Zachary Woods <143150513+zach-fau@users.noreply.github.com>")]
#[command(version)]
#[command(about = "Strongly and weakly connected component analyzer for directed graphs", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a graph read from a file
    Analyze {
        /// Path to an edge list or JSON graph
        path: PathBuf,

        /// Input format: auto, edges, json
        #[arg(short, long, default_value = "auto")]
        input_format: InputFormat,

        /// Treat vertex labels as 0-based (JSON inputs may override)
        #[arg(short, long)]
        zero_based: bool,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Analyze the built-in 9-vertex reference graph
    Sample {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Show version information
    Version,
}

#[derive(Args)]
struct OutputArgs {
    /// Seed order for the first SCC pass: finish, sweep
    #[arg(short, long, default_value = "finish")]
    seed_order: SeedOrder,

    /// Cross-check results against petgraph
    #[arg(long)]
    verify: bool,

    /// Output format: text, json, csv, markdown
    #[arg(short, long, default_value = "text")]
    format: ExportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl OutputArgs {
    fn config(&self) -> AnalysisConfig {
        AnalysisConfig::default()
            .with_seed_order(self.seed_order)
            .with_verify(self.verify)
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run_analysis(source: &str, labeled: LabeledGraph, args: &OutputArgs) -> Result<()> {
    let report = analyze(&labeled.graph, &args.config());
    info!(
        sccs = report.sccs.len(),
        wccs = report.wccs.len(),
        "Analyzed {}",
        source
    );

    let data = ExportData::new(source, labeled.index_base, report);
    match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating output file: {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            export(args.format, &data, &mut writer)
                .and_then(|_| writer.flush())
                .with_context(|| format!("writing {} report: {}", args.format, path.display()))?;
            debug!("Report written to {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            export(args.format, &data, &mut writer).context("writing report to stdout")?;
        }
    }
    Ok(())
}

fn load(path: &Path, input_format: InputFormat, zero_based: bool) -> Result<LabeledGraph> {
    let default_base = if zero_based {
        IndexBase::Zero
    } else {
        IndexBase::One
    };
    let labeled = parser::parse_file(path, input_format, default_base)
        .with_context(|| format!("reading graph: {}", path.display()))?;
    debug!(
        vertices = labeled.graph.vertex_count(),
        edges = labeled.graph.edge_count(),
        base = %labeled.index_base,
        "Loaded graph"
    );
    Ok(labeled)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            path,
            input_format,
            zero_based,
            output,
        } => {
            let labeled = load(&path, input_format, zero_based)?;
            run_analysis(&path.display().to_string(), labeled, &output)
        }
        Commands::Sample { output } => {
            let labeled = sample::reference_graph().context("building sample graph")?;
            run_analysis("sample", labeled, &output)
        }
        Commands::Version => {
            println!("graphscope v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
