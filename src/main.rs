use clap::Parser;
use pokersim::pipeline::Config;

/// Deal a large batch of simulated poker rounds across a pool of
/// concurrent workers and account for every result.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of concurrent deal workers
    #[arg(short = 'g', long, default_value_t = 1000)]
    workers: usize,
    /// Total number of rounds dealt across the pool
    #[arg(short = 'r', long, default_value_t = 10000)]
    rounds: usize,
    /// Number of players seated per round
    #[arg(short = 'p', long, default_value_t = 6)]
    players: usize,
}

fn main() -> anyhow::Result<()> {
    pokersim::log();
    let args = Args::parse();
    let config = Config::new(args.workers, args.rounds, args.players)?;
    log::info!("dealing {}", config);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(num_cpus::get())
        .enable_all()
        .build()?;
    let rounds = runtime.block_on(pokersim::pipeline::run(config));
    log::info!("collected {} rounds", rounds);
    Ok(())
}
