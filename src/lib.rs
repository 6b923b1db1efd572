//! Online decision engine for a heads-up No-Limit Hold'em agent.
//!
//! Given the running action history of a hand, we collapse the raw betting
//! sequence into a bounded abstract representation, derive or look up a
//! strategy for the resulting information set, sample a concrete action, and
//! translate abstract bet sizes back into legal chip amounts.

pub mod agent;
pub mod cards;
pub mod equity;
pub mod error;
pub mod history;
pub mod infoset;
pub mod sizing;
pub mod spot;
pub mod strategy;
pub mod villain;

/// Stack sizes, pot sizes, and bet amounts.
pub type Chips = u32;
/// Equity estimates, regrets, and thresholds.
pub type Utility = f32;
/// Strategy weights and sampling distributions.
pub type Probability = f32;

/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// DECISION PARAMETERS
// ============================================================================
/// Minimum equity to justify aggression in the online regret estimate.
pub const RAISE_THRESHOLD: Utility = 0.6;
/// Raw street length at which raise wars collapse to a fixed closing pattern.
pub const COLLAPSE_DEPTH: usize = 4;
/// Tolerance for probability-sums-to-one assertions.
pub const POLICY_EPSILON: Probability = 1e-6;

// ============================================================================
// EQUITY MEMOIZATION
// ============================================================================
/// Bounded capacity of the (hole, board) -> equity cache.
pub const EQUITY_MEMO_LIMIT: usize = 4096;

// ============================================================================
// OPPONENT MODELING
// ============================================================================
/// Chance of counting an observed aggression as a bluff. Coarse heuristic.
pub const BLUFF_ODDS: Probability = 0.1;
/// Floor on the villain-adjusted sizing multiplier.
pub const SCALE_MIN: Utility = 0.5;
/// Ceiling on the villain-adjusted sizing multiplier.
pub const SCALE_MAX: Utility = 1.5;
/// Floor on the villain-adjusted raise-equity threshold.
pub const THRESHOLD_MIN: Utility = 0.4;
/// Ceiling on the villain-adjusted raise-equity threshold.
pub const THRESHOLD_MAX: Utility = 0.8;

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
