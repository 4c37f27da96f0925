use serde::{Deserialize, Serialize};

/// The units that an [`Amount`] can be entered or displayed in.
///
/// The string forms (`"PRIV"`, `"mPRIV"`, `"uPRIV"`) are case-sensitive, since
/// `mPRIV` and `MPRIV` would otherwise be ambiguous.
///
/// [`Amount`]: crate::amount::Amount
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumString, strum::VariantArray)]
#[allow(non_camel_case_types)]
pub enum Denomination {
    /// 1 PRIV = 10^8 base units.
    #[default]
    PRIV,
    /// 1 mPRIV = 10^5 base units.
    mPRIV,
    /// 1 uPRIV = 10^2 base units.
    uPRIV,
}

impl Denomination {
    /// The number of fractional digits this unit supports, i.e. one unit is
    /// `10^decimals()` base units.
    pub const fn decimals(self) -> u32 {
        match self {
            Self::PRIV => 8,
            Self::mPRIV => 5,
            Self::uPRIV => 2,
        }
    }

    /// The number of base units in one of this unit.
    pub const fn factor(self) -> u64 {
        10u64.pow(self.decimals())
    }

    /// A longer, human-readable description, e.g. for a unit picker.
    pub const fn description(self) -> &'static str {
        match self {
            Self::PRIV => "PRiVCY",
            Self::mPRIV => "Milli-PRiVCY (1 / 1,000)",
            Self::uPRIV => "Micro-PRiVCY (1 / 1,000,000)",
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
mod arbitrary_impl {
    use proptest::{
        arbitrary::Arbitrary,
        sample,
        strategy::{BoxedStrategy, Strategy},
    };
    use strum::VariantArray;

    use super::*;

    impl Arbitrary for Denomination {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;
        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            sample::select(Denomination::VARIANTS).boxed()
        }
    }
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use super::*;
    use crate::test_utils::roundtrip;

    #[test]
    fn denomination_fromstr_display_roundtrip() {
        roundtrip::fromstr_display_roundtrip_proptest::<Denomination>();
    }

    #[test]
    fn denomination_json_matches_display() {
        roundtrip::fromstr_json_string_equiv::<Denomination>();
    }

    #[test]
    fn denomination_factors() {
        assert_eq!(Denomination::PRIV.factor(), 100_000_000);
        assert_eq!(Denomination::mPRIV.factor(), 100_000);
        assert_eq!(Denomination::uPRIV.factor(), 100);
    }

    #[test]
    fn denomination_parse_is_case_sensitive() {
        assert_eq!(
            Denomination::from_str("mPRIV").unwrap(),
            Denomination::mPRIV
        );
        assert!(Denomination::from_str("MPRIV").is_err());
        assert!(Denomination::from_str("priv").is_err());
    }
}
