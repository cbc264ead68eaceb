use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::io;
use std::path::PathBuf;
use trace_graph::config::Config;
use trace_graph::tools::export_shortest_paths_json;
use trace_graph::{
    enumerate_with, load_graph, parallel_shortest_paths, shortest_paths, trace_latency_output,
    traces_by_exact_hops, traces_by_max_hops, traces_by_max_latency, ExportOptions, Graph,
    ImportOptions, WalkMode, WalkOptions,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "trace_graph")]
#[command(about = "Query walks, walk latencies and shortest paths of a weighted graph", long_about = None)]
struct Args {
    /// Graph file (CSV `tail,head,weight` records, or .json)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Log level or filter directive
    #[arg(long)]
    log_level: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,

    /// Skip malformed CSV records instead of failing
    #[arg(long)]
    skip_errors: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the ten canonical queries
    Exercises,

    /// Latency of a literal walk, e.g. A-B-C
    Latency {
        /// Node labels separated by '-'
        walk: String,
    },

    /// Enumerate walks between two nodes
    Walks {
        start: String,
        end: String,

        /// Walks with exactly N edges
        #[arg(long)]
        exact_hops: Option<usize>,

        /// Walks with at most N edges
        #[arg(long)]
        max_hops: Option<usize>,

        /// Walks with latency at most N
        #[arg(long)]
        max_latency: Option<u64>,

        /// Never expand walks beyond this many edges
        #[arg(long)]
        max_depth: Option<usize>,

        /// Stop after this many walks (0 = unlimited)
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },

    /// Shortest paths from one or more sources
    Shortest {
        /// Source labels
        #[arg(required = true)]
        sources: Vec<String>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::from_env()?;

    if let Some(input) = args.input.clone() {
        config.input.path = input;
    }
    if let Some(level) = args.log_level.clone() {
        config.logging.level = level;
    }
    if let Some(format) = &args.log_format {
        config.logging.format = match format {
            LogFormat::Pretty => "pretty".to_string(),
            LogFormat::Json => "json".to_string(),
        };
    }
    config.input.skip_errors |= args.skip_errors;

    init_logging(&config)?;
    tracing::info!("Using graph input at {}", config.input.path.display());

    rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallel.threads)
        .build_global()
        .context("Failed to configure thread pool")?;

    let options = ImportOptions {
        skip_errors: config.input.skip_errors,
        ..Default::default()
    };
    let (graph, stats) = load_graph(&config.input.path, &options)
        .with_context(|| format!("Could not read graph file {}", config.input.path.display()))?;
    tracing::info!(
        nodes = stats.nodes_imported,
        edges = stats.edges_imported,
        skipped = stats.edges_skipped,
        "Graph loaded"
    );
    graph.log_summary();

    match args.command {
        Command::Exercises => run_exercises(&graph),
        Command::Latency { walk } => {
            let labels: Vec<&str> = walk.split('-').map(str::trim).collect();
            println!("{}", trace_latency_output(&graph, &labels)?);
            Ok(())
        }
        Command::Walks {
            start,
            end,
            exact_hops,
            max_hops,
            max_latency,
            max_depth,
            limit,
        } => {
            let mode = match (exact_hops, max_hops, max_latency) {
                (Some(n), None, None) => WalkMode::ExactHops(n),
                (None, Some(n), None) => WalkMode::MaxHops(n),
                (None, None, Some(n)) => WalkMode::MaxLatency(n),
                _ => bail!("Exactly one of --exact-hops, --max-hops, --max-latency is required"),
            };
            let options = WalkOptions {
                max_walks: limit,
                max_depth,
            };
            let walks = enumerate_with(&graph, &start, &end, mode, &options)?;
            for (i, walk) in walks.iter().enumerate() {
                println!("{}. {} ({})", i + 1, walk, walk.latency);
            }
            println!("{} walks", walks.len());
            Ok(())
        }
        Command::Shortest { sources, json } => {
            let results = parallel_shortest_paths(&graph, &sources)?;
            for result in &results {
                if json {
                    export_shortest_paths_json(result, io::stdout().lock(), &ExportOptions::default())?;
                    continue;
                }
                println!("From {}:", result.source);
                for (target, path) in result.iter() {
                    match path {
                        Some(p) => println!("  {} = {} via {}", target, p.distance, p.path.join("-")),
                        None => println!("  {} unreachable", target),
                    }
                }
            }
            Ok(())
        }
    }
}

/// The canonical query set over the trains graph
fn run_exercises(graph: &Graph) -> Result<()> {
    let walks: [&[&str]; 5] = [
        &["A", "B", "C"],
        &["A", "D"],
        &["A", "D", "C"],
        &["A", "E", "B", "C", "D"],
        &["A", "E", "D"],
    ];
    for (i, walk) in walks.into_iter().enumerate() {
        tracing::info!("{}. {}", i + 1, trace_latency_output(graph, walk)?);
    }

    tracing::info!("6. {}", traces_by_max_hops(graph, "C", "C", 3)?.len());
    tracing::info!("7. {}", traces_by_exact_hops(graph, "A", "C", 4)?.len());

    let distance = |source: &str, target: &str| -> Result<String> {
        Ok(shortest_paths(graph, source)?
            .distance(target)
            .map_or_else(|| "NO SUCH ROUTE".to_string(), |d| d.to_string()))
    };
    tracing::info!("8. {}", distance("A", "C")?);
    tracing::info!("9. {}", distance("B", "B")?);

    tracing::info!("10. {}", traces_by_max_latency(graph, "C", "C", 30)?.len());
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }

    Ok(())
}
