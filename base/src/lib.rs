//! Shared vocabulary for the exactfp crate family: the error taxonomy, the
//! [Approximation] rounding-result wrapper, sign/bit traits, and the ring
//! traits (`DivRem`, `Gcd`, `ExtendedGcd`) that the integer, float, rational
//! and accumulate crates build on top of.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate core;

pub mod approx;
pub mod bit;
pub mod error;
pub mod ring;
pub mod sign;

pub use approx::*;
pub use bit::*;
pub use error::*;
pub use ring::*;
pub use sign::*;
