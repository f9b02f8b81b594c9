//! Command-line runner: load or generate missions, run the selected algorithms, print the comparison.

use clap::{ArgGroup, Parser, ValueEnum};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use uav_routing::prelude::*;
use uav_routing::utils::format_summary;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    Best,
    First,
}

impl From<PolicyArg> for ImprovementPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Best => ImprovementPolicy::BestImprovement,
            PolicyArg::First => ImprovementPolicy::FirstImprovement,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "uav-routing", about = "UAV route optimization", version)]
#[command(group(ArgGroup::new("source").required(true).args(["generate", "file"])))]
struct Args {
    /// Algorithm to run: greedy, heuristic or all
    #[arg(long, default_value = "all")]
    algorithm: AlgorithmSelection,

    /// Generate random missions
    #[arg(long)]
    generate: bool,

    /// Number of missions to generate, or the maximum number of files to load
    #[arg(short, long, default_value_t = 5)]
    number: usize,

    /// JSON mission files to load
    #[arg(long, num_args = 1..)]
    file: Vec<PathBuf>,

    /// Seed for generation and the heuristic's perturbation
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Soft time limit for the heuristic, in milliseconds
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Maximum number of 2-opt moves the heuristic may apply
    #[arg(long, default_value_t = 10_000)]
    max_iterations: u32,

    /// Perturbation rounds after the first local optimum (0 disables)
    #[arg(long, default_value_t = 50)]
    perturbations: u32,

    /// 2-opt move selection policy
    #[arg(long, value_enum, default_value = "best")]
    policy: PolicyArg,

    /// Run every job on the main thread
    #[arg(long)]
    sequential: bool,

    /// Print the results as JSON instead of a text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let instances = if args.generate {
        info!("Generating {} missions (seed {})", args.number, args.seed);
        InstanceGenerator::new(GeneratorConfig::new().with_seed(args.seed))
            .generate_batch(args.number)?
    } else {
        args.file
            .iter()
            .take(args.number)
            .map(ProblemInstance::from_file)
            .collect::<Result<Vec<_>, _>>()?
    };

    if instances.is_empty() {
        return Err("no valid missions to process".into());
    }

    let mut config = Config::new()
        .with_policy(args.policy.into())
        .with_max_iterations(args.max_iterations)
        .with_perturbation_rounds(args.perturbations)
        .with_seed(args.seed);
    if let Some(ms) = args.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }

    let evaluator = if args.sequential {
        Evaluator::sequential(config)
    } else {
        Evaluator::new(config)
    };

    info!(
        "Processing {} missions with '{}'",
        instances.len(),
        args.algorithm
    );
    let summary = Comparator::new(evaluator).compare(args.algorithm, &instances);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}
