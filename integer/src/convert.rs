//! String conversions for [`UBig`] and [`crate::SBig`]: decimal/hex
//! formatting and radix-aware parsing.
//!
//! [`Debug`] elides the middle of very large numbers (keeping a handful of
//! leading and trailing digits) so that printing a multi-million-digit value
//! in a failed test assertion does not flood the terminal.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use exactfp_base::{Error, Result};

use crate::ubig::UBig;
use crate::{SBig, Word};

/// Above this many decimal digits, [`Debug`] for [`UBig`]/[`SBig`] elides the
/// middle of the number.
const DEBUG_ELIDE_THRESHOLD: usize = 64;
const DEBUG_ELIDE_KEEP: usize = 24;

/// Decimal digits are produced in base `10^9` chunks, the largest power of
/// ten that fits in a `Word`.
const DECIMAL_CHUNK: u64 = 1_000_000_000;
const DECIMAL_CHUNK_DIGITS: usize = 9;

impl UBig {
    /// The decimal string representation.
    pub fn to_string_decimal(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let mut chunks = Vec::new();
        let mut rest = self.clone();
        let divisor = UBig::from_u64(DECIMAL_CHUNK);
        while !rest.is_zero() {
            let (q, r) = rest.div_rem(&divisor).expect("divisor 10^9 is nonzero");
            chunks.push(r.to_u64().expect("remainder mod 10^9 fits in u64"));
            rest = q;
        }
        let mut out = format!("{}", chunks.last().unwrap());
        for chunk in chunks.iter().rev().skip(1) {
            out.push_str(&format!("{:0width$}", chunk, width = DECIMAL_CHUNK_DIGITS));
        }
        out
    }

    /// The hexadecimal string representation, lowercase, with no prefix.
    pub fn to_hex_string(&self) -> String {
        if self.is_zero() {
            return String::from("0");
        }
        let words = self.words();
        let mut out = format!("{:x}", words[words.len() - 1]);
        for &w in words[..words.len() - 1].iter().rev() {
            out.push_str(&format!("{:08x}", w));
        }
        out
    }

    /// Parse a non-negative integer in the given `radix` (2 through 36).
    /// Rejects a leading sign (`UBig` has none).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if !(2..=36).contains(&radix) {
            return Err(Error::domain("UBig::from_str_radix: radix out of range (2..=36)"));
        }
        if s.is_empty() {
            return Err(Error::domain("UBig::from_str_radix: empty string"));
        }
        if s.starts_with('+') || s.starts_with('-') {
            return Err(Error::domain("UBig::from_str_radix: unsigned parse does not accept a sign"));
        }
        let mut value = UBig::zero();
        let radix_big = UBig::from_u64(radix as u64);
        let mut any_digit = false;
        for c in s.chars() {
            if c == '_' {
                continue;
            }
            let digit = c.to_digit(radix).ok_or_else(|| Error::domain("UBig::from_str_radix: invalid digit"))?;
            value = value.mul(&radix_big)?.add(&UBig::from_u64(digit as u64))?;
            any_digit = true;
        }
        if !any_digit {
            return Err(Error::domain("UBig::from_str_radix: no digits in input"));
        }
        Ok(value)
    }
}

impl fmt::Display for UBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_decimal())
    }
}

impl fmt::LowerHex for UBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl fmt::UpperHex for UBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string().to_uppercase())
    }
}

impl SBig {
    pub fn to_hex_string(&self) -> String {
        if self.is_negative() {
            format!("-{}", self.magnitude().to_hex_string())
        } else {
            self.magnitude().to_hex_string()
        }
    }

    /// Parse a signed integer (optional leading `+`/`-`) in the given
    /// `radix` (2 through 36).
    pub fn from_str_radix(s: &str, radix: u32) -> Result<Self> {
        if let Some(rest) = s.strip_prefix('-') {
            let mag = UBig::from_str_radix(rest, radix)?;
            Ok(SBig::from_ubig(mag).neg())
        } else if let Some(rest) = s.strip_prefix('+') {
            Ok(SBig::from_ubig(UBig::from_str_radix(rest, radix)?))
        } else {
            Ok(SBig::from_ubig(UBig::from_str_radix(s, radix)?))
        }
    }
}

impl core::str::FromStr for UBig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        UBig::from_str_radix(s, 10)
    }
}

impl core::str::FromStr for SBig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SBig::from_str_radix(s, 10)
    }
}

/// Write a decimal string, eliding the middle with `...` once it exceeds
/// [`DEBUG_ELIDE_THRESHOLD`] digits.
fn write_elided(f: &mut fmt::Formatter<'_>, digits: &str) -> fmt::Result {
    if digits.len() <= DEBUG_ELIDE_THRESHOLD {
        return f.write_str(digits);
    }
    write!(
        f,
        "{}...{} ({} digits)",
        &digits[..DEBUG_ELIDE_KEEP],
        &digits[digits.len() - DEBUG_ELIDE_KEEP..],
        digits.len()
    )
}

impl fmt::Debug for UBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_elided(f, &self.to_string_decimal())
    }
}

impl fmt::Debug for SBig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        write_elided(f, &self.magnitude().to_string_decimal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn decimal_round_trip() {
        for s in ["0", "1", "42", "18446744073709551616", "123456789012345678901234567890"] {
            let u = UBig::from_str_radix(s, 10).unwrap();
            assert_eq!(u.to_string(), s);
        }
    }

    #[test]
    fn hex_round_trip() {
        let u = UBig::from_u64(0xdead_beef_1234_5678);
        assert_eq!(u.to_hex_string(), "deadbeef12345678");
        assert_eq!(UBig::from_str_radix("deadbeef12345678", 16).unwrap(), u);
    }

    #[test]
    fn rejects_sign_and_invalid_digits() {
        assert!(UBig::from_str_radix("-5", 10).is_err());
        assert!(UBig::from_str_radix("12a", 10).is_err());
        assert!(UBig::from_str_radix("", 10).is_err());
        assert!(UBig::from_str_radix("ff", 37).is_err());
    }

    #[test]
    fn signed_parse_round_trips() {
        assert_eq!(SBig::from_str_radix("-123", 10).unwrap(), SBig::from_i64(-123));
        assert_eq!(SBig::from_str_radix("+123", 10).unwrap(), SBig::from_i64(123));
        assert_eq!(SBig::from_str_radix("123", 10).unwrap(), SBig::from_i64(123));
    }

    #[test]
    fn debug_elides_large_numbers() {
        let big = UBig::from_str_radix(&"7".repeat(100), 10).unwrap();
        let debug = format!("{:?}", big);
        assert!(debug.contains("..."));
        assert!(debug.contains("100 digits"));
    }

    #[test]
    fn debug_does_not_elide_small_numbers() {
        let small = UBig::from_u64(42);
        assert_eq!(format!("{:?}", small), "42");
    }
}
