//! A PRiVCY amount newtype which maintains some useful internal invariants and
//! provides utilities for conversions to and from the supported
//! [`Denomination`]s.
//!
//! Note that we don't impl `From<u64>`, `TryFrom<Decimal>`, [`FromStr`], etc
//! because we want calling code to be explicit about what the input unit is.
//!
//! ### Parsing [`Amount`]s
//!
//! If an [`Amount`] needs to be parsed from user-provided text, use
//! [`Amount::parse_in`] with the unit the text was entered in. Parsing is
//! strict: the text must be a plain, non-negative decimal number with no more
//! fractional digits than the unit supports. Nothing is rounded.
//!
//! ```
//! # use common::{amount::Amount, denomination::Denomination};
//! let amount = Amount::parse_in(Denomination::PRIV, "1.5").unwrap();
//! assert_eq!(amount.units(), 150_000_000);
//!
//! // Too many decimal places for PRIV
//! assert!(Amount::parse_in(Denomination::PRIV, "0.000000001").is_err());
//! ```
//!
//! ### [`Display`]ing [`Amount`]s
//!
//! [`Amount`]'s [`Display`] impl displays the contained base-unit integer and
//! does not include any unit suffix. For other units, use
//! [`Amount::format_in`] or [`Amount::to_decimal_in`].
//!
//! [`Display`]: std::fmt::Display
//! [`FromStr`]: std::str::FromStr

use std::fmt::{self, Display};

use rust_decimal::{Decimal, prelude::ToPrimitive};
use serde::{Deserialize, Deserializer, Serialize};

use crate::denomination::Denomination;

/// Errors that can occur when attempting to construct or parse an [`Amount`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Amount is empty")]
    Empty,
    #[error("Amount is negative")]
    Negative,
    #[error("Amount is not a valid decimal number")]
    Malformed,
    #[error("Amount has more than {max_decimals} decimal places")]
    TooPrecise { max_decimals: u32 },
    #[error("Amount is too large")]
    TooLarge,
}

/// A PRiVCY amount, internally represented as a [`u64`] count of base units
/// (10^-8 PRIV), which provides the following properties:
///
/// - The contained value is non-negative.
/// - The contained value is no greater than [`Amount::MAX`].
/// - Converting to any [`Denomination`] and back doesn't lose any precision.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[derive(Serialize)]
pub struct Amount(u64);

impl Amount {
    /// The maximum [`Amount`] that this type can represent. Wallet amounts
    /// are signed 64-bit integers on the node side, so we cap at
    /// [`i64::MAX`] base units to make conversions there infallible.
    pub const MAX: Self = Self(i64::MAX as u64);

    /// An [`Amount`] of zero.
    pub const ZERO: Self = Self(0);

    // --- Constructors --- //

    /// Construct an [`Amount`] from a base-unit [`u64`] value.
    #[inline]
    pub fn from_units(units: u64) -> Result<Self, Error> {
        if units > Self::MAX.0 {
            Err(Error::TooLarge)
        } else {
            Ok(Self(units))
        }
    }

    /// Construct an [`Amount`] from a base-unit [`u32`] value. Infallible.
    #[inline]
    pub fn from_units_u32(units: u32) -> Self {
        Self(u64::from(units))
    }

    /// Construct an [`Amount`] from a PRIV [`Decimal`] value.
    #[inline]
    pub fn try_from_coins(coins: Decimal) -> Result<Self, Error> {
        Self::try_from_decimal_in(Denomination::PRIV, coins)
    }

    /// Construct an [`Amount`] from a [`Decimal`] value given in `denom`.
    ///
    /// The value must be representable exactly; it is never rounded.
    pub fn try_from_decimal_in(
        denom: Denomination,
        value: Decimal,
    ) -> Result<Self, Error> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(Error::Negative);
        }

        let units = value
            .checked_mul(Decimal::from(denom.factor()))
            .ok_or(Error::TooLarge)?;

        if !units.fract().is_zero() {
            return Err(Error::TooPrecise {
                max_decimals: denom.decimals(),
            });
        }

        let units = units.to_u64().ok_or(Error::TooLarge)?;
        Self::from_units(units)
    }

    /// Parse user-provided text, denominated in `denom`, into an [`Amount`].
    ///
    /// Accepts `<digits>`, `<digits>.`, `.<digits>`, and `<digits>.<digits>`.
    /// Signs, exponents, whitespace, and digit separators are all rejected.
    pub fn parse_in(denom: Denomination, s: &str) -> Result<Self, Error> {
        if s.is_empty() {
            return Err(Error::Empty);
        }
        if s.starts_with('-') {
            return Err(Error::Negative);
        }

        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));

        let is_digits = |x: &str| x.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && frac.is_empty())
            || !is_digits(whole)
            || !is_digits(frac)
        {
            return Err(Error::Malformed);
        }

        let max_decimals = denom.decimals();
        if frac.len() > max_decimals as usize {
            return Err(Error::TooPrecise { max_decimals });
        }

        // Leading zeros don't contribute to the magnitude. Anything with more
        // whole digits than `i64::MAX` (19) can't possibly fit.
        let whole = whole.trim_start_matches('0');
        if whole.len() > 19 {
            return Err(Error::TooLarge);
        }
        let whole = if whole.is_empty() { "0" } else { whole };

        let decimal = if frac.is_empty() {
            Decimal::from_str_exact(whole)
        } else {
            Decimal::from_str_exact(&format!("{whole}.{frac}"))
        }
        .map_err(|_| Error::Malformed)?;

        Self::try_from_decimal_in(denom, decimal)
    }

    // --- Getters --- //

    /// Returns the [`Amount`] as a [`u64`] base-unit value.
    #[inline]
    pub fn units(&self) -> u64 {
        self.0
    }

    /// Returns the [`Amount`] as a PRIV [`Decimal`] value.
    #[inline]
    pub fn coins(&self) -> Decimal {
        self.to_decimal_in(Denomination::PRIV)
    }

    /// Returns the [`Amount`] as an exact [`Decimal`] in `denom`. The
    /// returned value always has exactly `denom.decimals()` decimal places.
    #[inline]
    pub fn to_decimal_in(&self, denom: Denomination) -> Decimal {
        Decimal::from_i128_with_scale(i128::from(self.0), denom.decimals())
    }

    /// Format the [`Amount`] in `denom`, trimming trailing zeros but keeping
    /// at least two decimal places (or all of them, if `denom` has fewer).
    ///
    /// ex: 1.5 PRIV -> "1.50", 0.00012345 PRIV -> "0.00012345"
    pub fn format_in(&self, denom: Denomination) -> String {
        const MIN_DECIMALS: usize = 2;

        let mut out = self.to_decimal_in(denom).to_string();
        if let Some(dot_idx) = out.find('.') {
            let keep_min = dot_idx + 1 + MIN_DECIMALS;
            let trimmed_len = out.trim_end_matches('0').len().max(keep_min);
            out.truncate(trimmed_len.min(out.len()));
        }
        out
    }

    /// Format the [`Amount`] in `denom` with a unit suffix, e.g. "1.50 PRIV".
    pub fn format_with_unit(&self, denom: Denomination) -> String {
        format!("{} {denom}", self.format_in(denom))
    }

    // --- Checked arithmetic --- //

    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        let inner = self.0.checked_add(rhs.0)?;
        Self::from_units(inner).ok()
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        let inner = self.0.checked_sub(rhs.0)?;
        Self::from_units(inner).ok()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let inner: u64 = Deserialize::deserialize(deserializer)?;
        Self::from_units(inner).map_err(serde::de::Error::custom)
    }
}

impl Display for Amount {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to u64's Display impl which respects `std::fmt` syntax.
        Display::fmt(&self.0, f)
    }
}

// --- Tests and test infra --- //

#[cfg(any(test, feature = "test-utils"))]
mod arbitrary_impl {
    use proptest::{
        arbitrary::Arbitrary,
        strategy::{BoxedStrategy, Strategy},
    };

    use super::*;

    impl Arbitrary for Amount {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;
        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (0..=Amount::MAX.0).prop_map(Amount).boxed()
        }
    }
}
