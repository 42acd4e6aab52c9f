//! Local search operators for improving an open visiting order.
//!
//! - [`two_opt_improve`] — Segment reversal
//! - [`or_opt_improve`] — Segment relocation (1–3 stops)

mod or_opt;
mod two_opt;

pub use or_opt::or_opt_improve;
pub use two_opt::two_opt_improve;

pub(crate) use or_opt::or_opt_pass;
pub(crate) use two_opt::two_opt_pass;

/// Minimum gain for a move to count as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-10;
