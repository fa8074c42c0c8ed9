//! Credal decision math utilities.

pub mod math;

pub use math::classical;
pub use math::criteria::*;
pub use math::dominance::*;
pub use math::expectation::*;
pub use math::TOL;
