//! Exactly-rounded reductions over `binary64` streams: sum, sum of absolute
//! values, sum of squares, dot product, L1 distance, L2 (squared) distance.
//!
//! The [`Accumulator`] trait is the common interface; [`BFltAccumulator`]
//! and [`BRatAccumulator`] are the two exact backends (backed by
//! [`exactfp_float::BFlt`] and [`exactfp_rational::BRat`] respectively, and
//! agreeing bit-for-bit on every reduction), while
//! [`CompensatedAccumulator`] is an auxiliary inexact backend for
//! benchmarking against.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod accumulator;
mod bflt_backend;
mod brat_backend;
mod compensated;

pub use accumulator::Accumulator;
pub use bflt_backend::BFltAccumulator;
pub use brat_backend::BRatAccumulator;
pub use compensated::CompensatedAccumulator;
pub use exactfp_base::{Error, Result};
