//! Resampling procedures.

mod block;

pub use block::{block_bootstrap, BlockBootstrapConfig};
