use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use condensa::config::Config;
use condensa::scc::SccAlgorithm;
use condensa::topo::TopoAlgorithm;

mod commands;

#[derive(Parser)]
#[command(name = "condensa")]
#[command(about = "SCC condensation, topological order and DAG path analysis")]
#[command(version)]
struct Cli {
    /// Config file (default: ./condensa.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the whole pipeline on a graph file
    Analyze {
        file: PathBuf,
        #[arg(long, value_enum)]
        scc: Option<SccAlgorithm>,
        #[arg(long, value_enum)]
        topo: Option<TopoAlgorithm>,
        /// Original vertex whose component seeds shortest paths
        #[arg(long)]
        source: Option<usize>,
        /// Also run the other SCC algorithm and compare
        #[arg(long)]
        cross_check: bool,
    },

    /// List strongly connected components
    Scc {
        file: PathBuf,
        #[arg(long, value_enum)]
        algorithm: Option<SccAlgorithm>,
    },

    /// Print a topological order
    Topo {
        file: PathBuf,
        #[arg(long, value_enum)]
        algorithm: Option<TopoAlgorithm>,
        /// Order the condensation instead of the graph itself
        #[arg(long)]
        condense: bool,
    },

    /// Single-source shortest paths over a DAG
    Shortest {
        file: PathBuf,
        /// Source vertex (default: the file's `source`, then the config)
        #[arg(long)]
        source: Option<usize>,
        /// Also reconstruct the path to this vertex
        #[arg(long)]
        target: Option<usize>,
        #[arg(long)]
        condense: bool,
    },

    /// Find the critical (longest) path of a DAG
    Critical {
        file: PathBuf,
        #[arg(long)]
        condense: bool,
    },

    /// Write the standard benchmark datasets
    Generate {
        /// Output directory (default: the config's output_dir)
        #[arg(long)]
        dir: Option<PathBuf>,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path),
        None => Config::load_or_default(Path::new(".")),
    }
}

fn init_logging(config: &Config, verbose: bool) {
    let level = if verbose {
        "debug"
    } else {
        config.log.level.as_str()
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config, cli.verbose);

    match cli.command {
        Commands::Analyze {
            file,
            scc,
            topo,
            source,
            cross_check,
        } => {
            let mut options = condensa::AnalysisOptions::from(&config.analysis);
            if let Some(scc) = scc {
                options.scc = scc;
            }
            if let Some(topo) = topo {
                options.topo = topo;
            }
            if let Some(source) = source {
                options.source = source;
            }
            options.cross_check |= cross_check;
            commands::analyze::run(&file, &options, cli.json)
        }
        Commands::Scc { file, algorithm } => {
            commands::scc::run(&file, algorithm.unwrap_or(config.analysis.scc), cli.json)
        }
        Commands::Topo {
            file,
            algorithm,
            condense,
        } => commands::topo::run(
            &file,
            algorithm.unwrap_or(config.analysis.topo),
            condense.then_some(config.analysis.scc),
            cli.json,
        ),
        Commands::Shortest {
            file,
            source,
            target,
            condense,
        } => commands::shortest::run(
            &file,
            source,
            target,
            condense.then_some(config.analysis.scc),
            &config,
            cli.json,
        ),
        Commands::Critical { file, condense } => {
            commands::critical::run(&file, condense.then_some(config.analysis.scc), cli.json)
        }
        Commands::Generate { dir, seed } => {
            let dir = dir.unwrap_or_else(|| config.generator.output_dir.clone());
            commands::generate::run(&dir, seed.unwrap_or(config.generator.seed), cli.json)
        }
    }
}
