//! The [`Accumulator`] trait: a stateful, single-writer reducer that
//! consumes `binary64` values and produces the correctly-rounded `binary64`
//! of the exact running total on demand.
//!
//! Every scalar method has a default implementation that fails with
//! [`Error::Unsupported`]; a backend overrides only the operations it
//! actually knows how to accumulate. The array-variant defaults are built on
//! top of the scalar methods, so a backend gets them for free the moment it
//! implements the corresponding scalar one.

use exactfp_base::{Error, Result};

/// A mutable holder of one running exact (or approximately exact) value,
/// fed one `binary64` term -- or pair of terms -- at a time.
///
/// All mutators return `Result<&mut Self>` so a chain can be
/// `?`-short-circuited while still reading fluently:
/// `acc.clear()?.add(x)?.add(y)?.to_f64()`.
pub trait Accumulator {
    /// Reset the running value to exact `0`.
    fn clear(&mut self) -> Result<&mut Self>;

    /// Add `x` to the running value.
    fn add(&mut self, x: f64) -> Result<&mut Self> {
        let _ = x;
        Err(Error::unsupported("Accumulator::add"))
    }

    /// Add `|x|` to the running value.
    fn add_abs(&mut self, x: f64) -> Result<&mut Self> {
        let _ = x;
        Err(Error::unsupported("Accumulator::add_abs"))
    }

    /// Add `x * x` to the running value.
    fn add2(&mut self, x: f64) -> Result<&mut Self> {
        let _ = x;
        Err(Error::unsupported("Accumulator::add2"))
    }

    /// Add `a * b` to the running value.
    fn add_product(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        let (_, _) = (a, b);
        Err(Error::unsupported("Accumulator::add_product"))
    }

    /// Add `|a - b|` to the running value.
    fn add_l1(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        let (_, _) = (a, b);
        Err(Error::unsupported("Accumulator::add_l1"))
    }

    /// Add `(a - b) * (a - b)` to the running value.
    fn add_l2(&mut self, a: f64, b: f64) -> Result<&mut Self> {
        let (_, _) = (a, b);
        Err(Error::unsupported("Accumulator::add_l2"))
    }

    /// The `binary64` closest to the exact running value, ties to even.
    fn to_f64(&self) -> f64;

    /// Whether rounding only ever happens at [`Self::to_f64`] -- i.e. every
    /// intermediate state is exact.
    fn is_exact(&self) -> bool;

    /// Whether the running value can never silently saturate to infinity
    /// before the caller asks for [`Self::to_f64`] (an `Error::Overflow`
    /// is still possible and is signaled, never swallowed).
    fn no_overflow(&self) -> bool;

    /// `add` every element of `xs` in order.
    fn add_all(&mut self, xs: &[f64]) -> Result<&mut Self> {
        for &x in xs {
            self.add(x)?;
        }
        Ok(self)
    }

    /// `add_abs` every element of `xs` in order.
    fn add_abs_all(&mut self, xs: &[f64]) -> Result<&mut Self> {
        for &x in xs {
            self.add_abs(x)?;
        }
        Ok(self)
    }

    /// `add2` every element of `xs` in order.
    fn add2_all(&mut self, xs: &[f64]) -> Result<&mut Self> {
        for &x in xs {
            self.add2(x)?;
        }
        Ok(self)
    }

    /// `add_product(a[i], b[i])` for every `i`. Fails with `Error::Domain`
    /// (naming the first offending index) if the slices differ in length.
    fn add_products(&mut self, a: &[f64], b: &[f64]) -> Result<&mut Self> {
        if a.len() != b.len() {
            return Err(Error::domain("Accumulator::add_products: mismatched slice lengths"));
        }
        for (&x, &y) in a.iter().zip(b.iter()) {
            self.add_product(x, y)?;
        }
        Ok(self)
    }

    /// `add_l1(a[i], b[i])` for every `i` -- the L1 distance between `a` and
    /// `b`. Fails with `Error::Domain` if the slices differ in length.
    fn add_l1_distance(&mut self, a: &[f64], b: &[f64]) -> Result<&mut Self> {
        if a.len() != b.len() {
            return Err(Error::domain("Accumulator::add_l1_distance: mismatched slice lengths"));
        }
        for (&x, &y) in a.iter().zip(b.iter()) {
            self.add_l1(x, y)?;
        }
        Ok(self)
    }

    /// `add_l2(a[i], b[i])` for every `i` -- the squared L2 distance between
    /// `a` and `b`. Fails with `Error::Domain` if the slices differ in
    /// length.
    fn add_l2_distance(&mut self, a: &[f64], b: &[f64]) -> Result<&mut Self> {
        if a.len() != b.len() {
            return Err(Error::domain("Accumulator::add_l2_distance: mismatched slice lengths"));
        }
        for (&x, &y) in a.iter().zip(b.iter()) {
            self.add_l2(x, y)?;
        }
        Ok(self)
    }
}

/// `x` must be finite to enter any exact accumulator.
pub(crate) fn require_finite(x: f64, context: &'static str) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(Error::domain(context))
    }
}
