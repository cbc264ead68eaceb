use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use trace_graph::{export_to_csv, export_to_json, ExportOptions, Graph};

#[derive(Debug, Clone, ValueEnum)]
enum GraphType {
    Uniform,
    Grid,
    Ring,
    Tree,
}

#[derive(Parser, Debug)]
#[command(name = "data_generator")]
#[command(about = "Generate weighted graph datasets for benchmarking", long_about = None)]
struct Args {
    /// Type of graph to generate
    #[arg(short, long, value_enum)]
    graph_type: GraphType,

    /// Number of nodes
    #[arg(short = 'n', long, default_value_t = 1000)]
    nodes: usize,

    /// Average out-degree for uniform graphs
    #[arg(short = 'd', long, default_value_t = 4)]
    avg_degree: usize,

    /// Tree depth (for tree graphs)
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Tree branching factor
    #[arg(short = 'b', long, default_value_t = 3)]
    branching: usize,

    /// Largest edge weight (weights are drawn from 1..=max)
    #[arg(short = 'w', long, default_value_t = 10)]
    max_weight: u64,

    /// Output directory
    #[arg(short, long)]
    output: PathBuf,

    /// Export formats (csv, json)
    #[arg(short, long, value_delimiter = ',', default_value = "csv")]
    formats: Vec<String>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,
}

struct GraphGenerator {
    rng: StdRng,
    max_weight: u64,
}

impl GraphGenerator {
    fn new(seed: u64, max_weight: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_weight: max_weight.max(1),
        }
    }

    fn weight(&mut self) -> u64 {
        self.rng.gen_range(1..=self.max_weight)
    }

    /// Uniform random directed multigraph with a fixed average out-degree
    fn generate_uniform(&mut self, n: usize, avg_degree: usize) -> Graph {
        println!("Generating uniform random graph with {} nodes, avg out-degree {}...", n, avg_degree);

        let mut graph = Graph::with_capacity(n, n * avg_degree);
        for i in 0..n {
            graph.add_node(&format!("N{}", i));
        }
        if n == 0 {
            return graph;
        }

        for _ in 0..n * avg_degree {
            let tail = self.rng.gen_range(0..n);
            let head = self.rng.gen_range(0..n);
            let weight = self.weight();
            graph.add_edge(&format!("N{}", tail), &format!("N{}", head), weight);
        }
        graph
    }

    /// Square grid with edges right and down, plus one edge back to the corner
    fn generate_grid(&mut self, size: usize) -> Graph {
        println!("Generating {}×{} grid graph...", size, size);

        let mut graph = Graph::with_capacity(size * size, 2 * size * size);
        let label = |r: usize, c: usize| format!("R{}C{}", r, c);
        for r in 0..size {
            for c in 0..size {
                graph.add_node(&label(r, c));
                if c + 1 < size {
                    let weight = self.weight();
                    graph.add_edge(&label(r, c), &label(r, c + 1), weight);
                }
                if r + 1 < size {
                    let weight = self.weight();
                    graph.add_edge(&label(r, c), &label(r + 1, c), weight);
                }
            }
        }
        if size > 1 {
            let weight = self.weight();
            graph.add_edge(&label(size - 1, size - 1), &label(0, 0), weight);
        }
        graph
    }

    /// Directed ring with random chords, dense in cycles
    fn generate_ring(&mut self, n: usize) -> Graph {
        println!("Generating ring graph with {} nodes...", n);

        let mut graph = Graph::with_capacity(n, 2 * n);
        for i in 0..n {
            let weight = self.weight();
            graph.add_edge(&format!("N{}", i), &format!("N{}", (i + 1) % n), weight);
            let chord = self.rng.gen_range(0..n);
            let weight = self.weight();
            graph.add_edge(&format!("N{}", i), &format!("N{}", chord), weight);
        }
        graph
    }

    /// Complete tree with edges pointing away from the root
    fn generate_tree(&mut self, depth: usize, branching: usize) -> Graph {
        println!("Generating tree with depth {} and branching factor {}...", depth, branching);

        let mut graph = Graph::new();
        graph.add_node("T0");
        let mut frontier = vec![0usize];
        let mut next_id = 1usize;

        for _ in 0..depth {
            let mut next = Vec::with_capacity(frontier.len() * branching);
            for parent in frontier {
                for _ in 0..branching {
                    let weight = self.weight();
                    graph.add_edge(&format!("T{}", parent), &format!("T{}", next_id), weight);
                    next.push(next_id);
                    next_id += 1;
                }
            }
            frontier = next;
        }
        graph
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Create output directory
    std::fs::create_dir_all(&args.output).context("Failed to create output directory")?;

    let mut generator = GraphGenerator::new(args.seed, args.max_weight);

    let graph = match args.graph_type {
        GraphType::Uniform => generator.generate_uniform(args.nodes, args.avg_degree),
        GraphType::Grid => generator.generate_grid((args.nodes as f64).sqrt().ceil() as usize),
        GraphType::Ring => generator.generate_ring(args.nodes),
        GraphType::Tree => generator.generate_tree(args.depth, args.branching),
    };

    for format in &args.formats {
        match format.as_str() {
            "csv" => {
                let path = args.output.join("graph.csv");
                let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
                export_to_csv(&graph, BufWriter::new(file))?;
                println!("Exported to CSV: {:?}", path);
            }
            "json" => {
                let path = args.output.join("graph.json");
                let file = File::create(&path).with_context(|| format!("Failed to create {:?}", path))?;
                export_to_json(&graph, BufWriter::new(file), &ExportOptions::default())?;
                println!("Exported to JSON: {:?}", path);
            }
            _ => eprintln!("Unknown format: {}", format),
        }
    }

    println!("\nData generation complete!");
    println!("Output directory: {:?}", args.output);
    println!("Graph statistics:");
    println!("  - Nodes: {}", graph.node_count());
    println!("  - Edges: {}", graph.edge_count());
    if !graph.is_empty() {
        let avg_degree = graph.edge_count() as f64 / graph.node_count() as f64;
        println!("  - Average out-degree: {:.2}", avg_degree);
    }

    Ok(())
}
