//! `PRiVCY:` payment request URI parsing and formatting
//!
//! The format follows [BIP21](https://github.com/bitcoin/bips/blob/master/bip-0021.mediawiki)
//! with the PRiVCY scheme and only the `label` and `amount` parameters.

use std::{borrow::Cow, fmt, str::FromStr};

use common::{amount::Amount, denomination::Denomination};
use serde::{Deserialize, Deserializer, Serialize, de};

use crate::{
    MAX_INPUT_LEN_KIB, ParseError,
    uri::{Uri, UriParam},
};

/// A request to pay some `address`, as encoded in a payment URI.
///
/// Examples:
///
/// ```not_rust
/// PRiVCY:PRiV5qoN9KrpRLsbvZ3hq5JAr8MqtX1MzE
///
/// PRiVCY:PRiV5qoN9KrpRLsbvZ3hq5JAr8MqtX1MzE?amount=20.3&label=Luke-Jr
///
/// PRiVCY://PRiV5qoN9KrpRLsbvZ3hq5JAr8MqtX1MzE?req-label=Donation
/// ```
///
/// A request with an empty `address` can't be built by parsing or
/// deserializing, and its URI wouldn't parse back.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct PaymentRequest {
    /// The payment destination, exactly as written in the URI (after
    /// percent-decoding). Never empty, but also never validated here.
    pub address: String,

    /// Recipient label / vendor
    pub label: Option<String>,

    /// Requested amount. [`Amount::ZERO`] if unspecified.
    pub amount: Amount,
}

impl PaymentRequest {
    pub const URI_SCHEME: &'static str = "PRiVCY";

    /// Parse a `PRiVCY:` (or `PRiVCY://`) payment URI.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        Self::parse_with_scheme(s, Self::URI_SCHEME)
    }

    /// Parse a payment URI with some other `scheme`. The scheme comparison is
    /// exact, including case.
    pub fn parse_with_scheme(
        s: &str,
        scheme: &str,
    ) -> Result<Self, ParseError> {
        let s = s.trim();
        if s.len() > (MAX_INPUT_LEN_KIB << 10) {
            return Err(ParseError::TooLong);
        }

        let uri = Uri::parse(s).ok_or(ParseError::UnsupportedScheme)?;
        if uri.scheme != scheme {
            tracing::debug!(
                expected = scheme,
                actual = uri.scheme,
                "Payment URI scheme mismatch"
            );
            return Err(ParseError::UnsupportedScheme);
        }

        Self::parse_uri_inner(uri)
            .inspect_err(|err| tracing::debug!("Rejected payment URI: {err}"))
    }

    fn parse_uri_inner(uri: Uri<'_>) -> Result<Self, ParseError> {
        if uri.body.is_empty() {
            return Err(ParseError::MissingAddress);
        }

        let params = uri
            .params
            .iter()
            .try_fold(Params::default(), Params::apply)?;

        Ok(Self {
            address: uri.body.into_owned(),
            label: params.label,
            amount: params.amount,
        })
    }

    /// Format this request as a URI with some other `scheme`.
    pub fn encode_with_scheme(&self, scheme: &str) -> String {
        self.to_uri(scheme).to_string()
    }

    fn to_uri<'a>(&'a self, scheme: &'a str) -> Uri<'a> {
        let mut out = Uri {
            scheme,
            body: Cow::Borrowed(&self.address),
            params: Vec::new(),
        };

        // A zero amount means "unspecified" and round trips as absent.
        if !self.amount.is_zero() {
            out.params.push(UriParam {
                key: Cow::Borrowed("amount"),
                value: Cow::Owned(self.amount.coins().normalize().to_string()),
            });
        }

        if let Some(label) = &self.label {
            out.params.push(UriParam {
                key: Cow::Borrowed("label"),
                value: Cow::Borrowed(label),
            });
        }

        out
    }
}

/// The recognized parameters accumulated while walking a URI's query string.
/// Later occurrences of a key overwrite earlier ones.
#[derive(Default)]
struct Params {
    label: Option<String>,
    amount: Amount,
}

impl Params {
    fn apply(self, param: &UriParam<'_>) -> Result<Self, ParseError> {
        let key = param.key_parsed();

        if key.is("label") {
            Ok(Self {
                label: Some(param.value.clone().into_owned()),
                ..self
            })
        } else if key.is("amount") {
            // An empty amount is the same as no amount.
            if param.value.is_empty() {
                return Ok(self);
            }
            let amount = Amount::parse_in(Denomination::PRIV, &param.value)
                .map_err(ParseError::InvalidAmount)?;
            Ok(Self { amount, ..self })
        } else if key.is_req {
            Err(ParseError::UnsupportedRequiredParameter(key.name.to_owned()))
        } else {
            // ignore unrecognized, optional params
            Ok(self)
        }
    }
}

impl FromStr for PaymentRequest {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PaymentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_uri(Self::URI_SCHEME), f)
    }
}

impl<'de> Deserialize<'de> for PaymentRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RawPaymentRequest {
            address: String,
            label: Option<String>,
            amount: Amount,
        }

        let raw = RawPaymentRequest::deserialize(deserializer)?;
        if raw.address.is_empty() {
            return Err(de::Error::custom(ParseError::MissingAddress));
        }

        Ok(Self {
            address: raw.address,
            label: raw.label,
            amount: raw.amount,
        })
    }
}

#[cfg(any(test, feature = "test-utils"))]
mod arbitrary_impl {
    use common::test_utils::arbitrary::{any_base58_address, any_label};
    use proptest::{
        arbitrary::{Arbitrary, any},
        option,
        strategy::{BoxedStrategy, Strategy},
    };

    use super::*;

    impl Arbitrary for PaymentRequest {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;
        fn arbitrary_with(_args: Self::Parameters) -> Self::Strategy {
            (any_base58_address(), option::of(any_label()), any::<Amount>())
                .prop_map(|(address, label, amount)| Self {
                    address,
                    label,
                    amount,
                })
                .boxed()
        }
    }
}
