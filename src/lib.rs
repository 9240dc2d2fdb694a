//! # seasonal-bootstrap
//!
//! Double seasonal block bootstrap over calendar dates.
//!
//! Given a set of historical dates spanning one or more years, generates N
//! independent simulated date sequences covering a target window by splicing
//! randomly located, randomly sized blocks of consecutive historical dates
//! together. Each block keeps the cursor's calendar position (perturbed by a
//! few days) but jumps to a uniformly chosen historical year, so the output
//! preserves both within-block temporal correlation and seasonal alignment.
//!
//! Downstream consumers join the sampled dates back onto their observation
//! tables to synthesize plausible weather or load scenarios; this crate
//! handles only the date resampling.

pub mod core;
pub mod error;
pub mod sampler;

pub use error::{BootstrapError, Result};

pub mod prelude {
    pub use crate::core::{DateSet, Simulation, TargetWindow};
    pub use crate::error::{BootstrapError, Result};
    pub use crate::sampler::{block_bootstrap, BlockBootstrapConfig};
}
