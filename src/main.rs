use anyhow::Result;
use clap::Parser;

use social_network_analyzer::cancel::CancelToken;
use social_network_analyzer::data::{EdgeSource, InMemoryEdgeSource, TextFileEdgeSource};
use social_network_analyzer::{storage, viz, Analyzer};

#[derive(Parser, Debug)]
#[clap(
    name = "social-network-analyzer",
    about = "Descriptive analytics over social-network friendship graphs"
)]
struct Cli {
    /// Path to the input edge-list file (whitespace-separated "a b" lines)
    #[clap(long)]
    input: String,

    /// Dataset identifier used for caching and logging
    #[clap(long, default_value = "default")]
    dataset: String,

    /// Output directory for results
    #[clap(long, default_value = "analysis_results")]
    output_dir: String,

    /// Skip graph visualization output
    #[clap(long)]
    skip_viz: bool,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!("Starting social network analysis");
    log::info!("Input: {}", args.input);
    log::info!("Output: {}", args.output_dir);

    // 1. Load the edge list once; analysis and the graph view share it
    let mut files = TextFileEdgeSource::new();
    files.register(&args.dataset, &args.input);
    let cancel = CancelToken::new();
    let edges = files.edges(&args.dataset, &cancel)?;

    // 2. Run the analysis
    let mut source = InMemoryEdgeSource::new();
    source.insert(&args.dataset, edges.clone());
    let analyzer = Analyzer::new(source);
    let report = analyzer.compute_analysis(&args.dataset, &cancel)?;

    log::info!(
        "Analyzed {} users, {} reachability levels, average clique size {:.3}",
        report.total_users,
        report.average_reachable_per_distance.len(),
        report.average_maximal_clique_size
    );

    // 3. Save results
    storage::save_report(&report, &args.output_dir)?;

    // 4. Generate graph visualization data if requested
    if !args.skip_viz {
        viz::save_graph_json(&edges, &args.output_dir)?;
    }

    log::info!("Analysis complete. Results saved to {}", args.output_dir);

    Ok(())
}
