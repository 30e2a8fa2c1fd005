use std::{
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wmst::{
    algo::{compare, Algorithm, Comparison},
    gens::{NumNodesGen, WeightedGraphGen},
    io::*,
    prelude::*,
};

#[derive(Parser)]
#[command(name = "wmst")]
#[command(version)]
#[command(about = "Compares Prim's and Kruskal's minimum spanning tree algorithms", long_about = None)]
struct Cli {
    /// Input document; searched in the usual locations if omitted
    #[arg(short, long, env = "WMST_INPUT")]
    input: Option<PathBuf>,

    /// Results document
    #[arg(short, long, env = "WMST_OUTPUT", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Write the results on a single line
    #[arg(long)]
    compact: bool,

    /// Directory receiving one DOT drawing per graph and algorithm
    #[arg(long)]
    dot_dir: Option<PathBuf>,

    /// Replace the input document by this many random connected graphs
    #[arg(long, value_name = "COUNT")]
    generate: Option<usize>,

    /// Nodes per generated graph
    #[arg(long, default_value_t = 20)]
    nodes: NumNodes,

    /// Edges per generated graph on top of its spanning tree
    #[arg(long, default_value_t = 30)]
    extra_edges: NumEdges,

    /// Seed for generated graphs
    #[arg(long, requires = "generate")]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "WMST_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(tracing_subscriber::EnvFilter::new(&cli.log_level))
        .init();

    let input = prepare_input(&cli)?;
    info!(path = %input.display(), "reading graphs");

    let graphs = JsonReader::new()
        .try_read_graphs_file(&input)
        .with_context(|| format!("failed to load graphs from {}", input.display()))?;

    let mut results = Vec::with_capacity(graphs.len());
    for graph in &graphs {
        info!(
            graph = graph.id(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "processing graph"
        );

        let comparison = compare(graph)?;
        report(&comparison);

        if let Some(dir) = &cli.dot_dir {
            write_drawings(dir, graph, &comparison)?;
        }

        results.push(comparison);
    }

    let mismatches = results.iter().filter(|c| !c.costs_agree()).count();
    if mismatches > 0 {
        warn!(mismatches, "engines disagree on some graphs");
    }

    JsonWriter::new()
        .pretty(!cli.compact)
        .try_write_results_file(&results, &cli.output)
        .with_context(|| format!("failed to write results to {}", cli.output.display()))?;
    info!(path = %cli.output.display(), graphs = results.len(), "results written");

    Ok(())
}

/// Returns the input path, generating or creating a sample document where requested
fn prepare_input(cli: &Cli) -> anyhow::Result<PathBuf> {
    if let Some(count) = cli.generate {
        let path = cli
            .input
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
        let mut rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let generator = WeightedGraphGen::new()
            .nodes(cli.nodes)
            .extra_edges(cli.extra_edges);
        let graphs = (1..=count as GraphId)
            .map(|id| generator.generate(&mut rng, id))
            .collect::<Vec<_>>();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::File::create(&path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        JsonWriter::new().try_write_graphs(&graphs, &mut writer)?;
        writer.flush()?;

        info!(path = %path.display(), count, "generated graphs");
        return Ok(path);
    }

    if let Some(path) = &cli.input {
        return Ok(path.clone());
    }

    match find_input_file(INPUT_CANDIDATES) {
        Some(path) => Ok(path),
        None => {
            warn!("no input file found");
            write_sample_input(DEFAULT_INPUT)?;
            Ok(PathBuf::from(DEFAULT_INPUT))
        }
    }
}

fn report(comparison: &Comparison) {
    println!(
        "Graph {} ({} vertices, {} edges)",
        comparison.graph_id, comparison.input_stats.vertices, comparison.input_stats.edges
    );
    for algorithm in Algorithm::ALL {
        println!("{algorithm}:\n{}", comparison.result_of(algorithm));
    }

    match comparison.check_consistency() {
        Ok(()) => println!("Total costs match.\n"),
        Err(err) => println!("WARNING: {err}\n"),
    }
}

fn write_drawings(dir: &Path, graph: &Graph, comparison: &Comparison) -> anyhow::Result<()> {
    std::fs::create_dir_all(dir)?;

    for algorithm in Algorithm::ALL {
        let path = dir.join(format!(
            "graph_{}_{}.dot",
            graph.id(),
            algorithm.name().to_lowercase()
        ));
        DotWriter::new().try_write_mst_file(graph, comparison.result_of(algorithm), &path)?;
    }
    Ok(())
}
