//! Monte Carlo poker deal pipeline.
//!
//! Deals a fixed number of independent rounds across a fixed-size pool of
//! concurrent workers. Round indices fan out over one bounded channel, dealt
//! results fan back in over another, and the collector's return is what
//! terminates a run.

pub mod cards;
pub mod deal;
pub mod pipeline;

/// Index of one dealt round within a run.
pub type Round = usize;
/// Seat index around the table.
pub type Seat = usize;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Number of progress lines the collector logs over one full run.
pub const PROGRESS_CHECKPOINTS: usize = 20;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
