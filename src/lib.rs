//! The facade crate re-exporting the public types of every `exactfp` leaf
//! crate: the arbitrary-precision integer kernel, the exact rational and
//! binary float representations, and the accumulators built on top of them.

#![cfg_attr(not(feature = "std"), no_std)]

/// Shared error, sign and ring-trait vocabulary.
pub mod base {
    pub use exactfp_base::*;
}

/// Arbitrary-precision unsigned and signed integers.
pub mod integer {
    pub use exactfp_int::*;
}

/// Exact binary floating point, and the round-half-to-even bridge to `f64`.
pub mod float {
    pub use exactfp_float::*;
}

/// Exact binary rational numbers.
pub mod rational {
    pub use exactfp_rational::*;
}

/// Accumulators for exactly-rounded reductions over `binary64` streams.
pub mod accumulate {
    pub use exactfp_accumulate::*;
}

pub use exactfp_accumulate::{Accumulator, BFltAccumulator, BRatAccumulator, CompensatedAccumulator};
pub use exactfp_float::BFlt;
pub use exactfp_int::{SBig, UBig};
pub use exactfp_rational::BRat;
