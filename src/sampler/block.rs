//! Double seasonal block bootstrap over calendar dates.
//!
//! Synthesizes plausible future date sequences by splicing randomly located,
//! randomly sized blocks of historical dates together. Local temporal
//! correlation survives inside each block; year-to-year variation enters
//! through the random choice of historical year per block.

use crate::core::{DateSet, Simulation, TargetWindow};
use crate::error::{BootstrapError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use rand::prelude::*;
use rand::SeedableRng;

/// Configuration for the block bootstrap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBootstrapConfig {
    /// Number of independent simulations to generate.
    pub n_sims: usize,
    /// Average block length in days.
    pub avg_block_len: usize,
    /// Maximum absolute day offset applied to the cursor before a block draw.
    pub delta_loc: u32,
    /// Maximum absolute offset applied to the block length.
    pub delta_len: u32,
    /// Random seed for reproducibility (None for entropy seeding).
    pub seed: Option<u64>,
    /// Retry budget per block before the call fails.
    pub max_retries: usize,
}

impl Default for BlockBootstrapConfig {
    fn default() -> Self {
        Self {
            n_sims: 100,
            avg_block_len: 14,
            delta_loc: 3,
            delta_len: 3,
            seed: None,
            max_retries: 100,
        }
    }
}

impl BlockBootstrapConfig {
    /// Create a config with the specified number of simulations.
    pub fn new(n_sims: usize) -> Self {
        Self {
            n_sims,
            ..Default::default()
        }
    }

    /// Set the average block length in days.
    pub fn with_avg_block_len(mut self, avg_block_len: usize) -> Self {
        self.avg_block_len = avg_block_len;
        self
    }

    /// Set the maximum cursor perturbation in days.
    pub fn with_delta_loc(mut self, delta_loc: u32) -> Self {
        self.delta_loc = delta_loc;
        self
    }

    /// Set the maximum block-length perturbation in days.
    pub fn with_delta_len(mut self, delta_len: u32) -> Self {
        self.delta_len = delta_len;
        self
    }

    /// Set the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the per-block retry budget.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.n_sims == 0 {
            return Err(BootstrapError::InvalidParameter(
                "n_sims must be at least 1".to_string(),
            ));
        }
        if self.avg_block_len == 0 {
            return Err(BootstrapError::InvalidParameter(
                "avg_block_len must be at least 1".to_string(),
            ));
        }
        if self.max_retries == 0 {
            return Err(BootstrapError::InvalidParameter(
                "max_retries must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Generate `n_sims` bootstrapped date sequences covering `window`.
///
/// Each simulation is built by splicing blocks of consecutive historical
/// dates until the window is filled, then truncating to the exact window
/// length and pairing position `i` with `window.start() + i` days. A block
/// is drawn by choosing a historical year uniformly, perturbing the cursor
/// by up to `delta_loc` days, rewriting the perturbed date's year to the
/// chosen one, and taking `avg_block_len ± delta_len` consecutive dates from
/// there. Draws that land outside the historical data, hit a nonexistent
/// date (Feb 29 in a non-leap year), cover a gap in the data, or come out
/// non-positive in length are rejected and redrawn without advancing the
/// cursor, up to `max_retries` times.
///
/// Simulations are mutually independent. With a seed set, each simulation's
/// random stream is derived from the seed and the 1-based simulation id, so
/// any single simulation can be reproduced without drawing through the
/// others.
///
/// # Errors
/// - [`BootstrapError::InvalidParameter`] for zero `n_sims`, `avg_block_len`,
///   or `max_retries`.
/// - [`BootstrapError::SamplingExhausted`] when a block's retry budget runs
///   out. No partial results are returned.
///
/// # Example
/// ```
/// use chrono::{Datelike, NaiveDate};
/// use seasonal_bootstrap::prelude::*;
///
/// let history: Vec<NaiveDate> = NaiveDate::from_ymd_opt(2015, 1, 1)
///     .unwrap()
///     .iter_days()
///     .take_while(|d| d.year() <= 2017)
///     .collect();
///
/// let dates = DateSet::new(history).unwrap();
/// let window = TargetWindow::new(
///     NaiveDate::from_ymd_opt(2018, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(),
/// )
/// .unwrap();
///
/// let config = BlockBootstrapConfig::new(50).with_seed(42);
/// let sims = block_bootstrap(&dates, &window, &config).unwrap();
///
/// assert_eq!(sims.len(), 50);
/// assert!(sims.iter().all(|s| s.len() == 31));
/// ```
pub fn block_bootstrap(
    dates: &DateSet,
    window: &TargetWindow,
    config: &BlockBootstrapConfig,
) -> Result<Vec<Simulation>> {
    config.validate()?;

    let mut simulations = Vec::with_capacity(config.n_sims);
    for id in 1..=config.n_sims {
        let mut rng: StdRng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(derive_seed(seed, id as u64)),
            None => StdRng::from_entropy(),
        };
        simulations.push(simulate(dates, window, config, id, &mut rng)?);
    }

    Ok(simulations)
}

/// Build one simulation: splice accepted blocks until the window is covered,
/// then truncate and pair with the target dates.
fn simulate(
    dates: &DateSet,
    window: &TargetWindow,
    config: &BlockBootstrapConfig,
    id: usize,
    rng: &mut StdRng,
) -> Result<Simulation> {
    let num_days = window.num_days();
    let mut sampled: Vec<NaiveDate> = Vec::with_capacity(num_days + config.avg_block_len);

    let mut loc_date = window.start();
    while loc_date <= window.end() {
        let block = draw_block(dates, loc_date, config, id, rng)?;
        loc_date += Duration::days(block.len() as i64);
        sampled.extend(block);
    }

    // Excess dates from the final block are truncated, never interpolated.
    sampled.truncate(num_days);

    let pairs = window.dates().zip(sampled).collect();
    Ok(Simulation::new(id, pairs))
}

/// Draw one valid block anchored near `loc_date`, retrying rejected draws up
/// to the configured budget.
fn draw_block(
    dates: &DateSet,
    loc_date: NaiveDate,
    config: &BlockBootstrapConfig,
    simulation: usize,
    rng: &mut StdRng,
) -> Result<Vec<NaiveDate>> {
    let years = dates.years();
    let delta_loc = config.delta_loc as i64;
    let delta_len = config.delta_len as i64;

    for _ in 0..config.max_retries {
        let year = years[rng.gen_range(0..years.len())];
        let shifted = loc_date + Duration::days(rng.gen_range(-delta_loc..=delta_loc));
        let block_len = config.avg_block_len as i64 + rng.gen_range(-delta_len..=delta_len);

        if block_len < 1 {
            continue;
        }

        // Rewrite the year while holding month and day fixed. Feb 29 in a
        // non-leap year has no counterpart and rejects the draw.
        let block_loc = match NaiveDate::from_ymd_opt(year, shifted.month(), shifted.day()) {
            Some(d) => d,
            None => continue,
        };

        if block_loc < dates.first() {
            continue;
        }
        let block_end = block_loc + Duration::days(block_len - 1);
        if block_end > dates.last() {
            continue;
        }

        let block: Vec<NaiveDate> = (0..block_len)
            .map(|i| block_loc + Duration::days(i))
            .collect();

        // Gaps in the historical record invalidate the whole block; only
        // dates that were actually observed may be emitted.
        if block.iter().any(|d| !dates.contains(*d)) {
            continue;
        }

        return Ok(block);
    }

    Err(BootstrapError::SamplingExhausted {
        simulation,
        target_date: loc_date,
        attempts: config.max_retries,
    })
}

/// Derive a per-simulation seed from the caller's seed and the simulation id.
///
/// splitmix64 finalizer; keeps per-simulation streams well separated even
/// for adjacent ids.
fn derive_seed(seed: u64, sim: u64) -> u64 {
    let mut z = seed.wrapping_add(sim.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
