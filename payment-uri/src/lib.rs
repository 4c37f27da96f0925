//! Parsing and encoding of PRiVCY payment URIs, e.g.
//! `PRiVCY:PAddr1234?amount=1.5&label=Coffee`.
//!
//! The parser is deliberately strict where it matters for funds (the scheme,
//! the amount, and `req-` parameters) and permissive elsewhere (unknown,
//! optional parameters are ignored). Address *validity* is out of scope: the
//! address is returned exactly as written, and the wallet is expected to
//! validate it before building a transaction.
//!
//! Parsing is a pure function of the input string, so it can be called from
//! any thread.

use std::fmt;

use common::amount;

/// Export all public types so they are accessible via the crate root.
/// The containing modules are used only for internal organization, and are
/// intentionally private so crate users have a simple, flat namespace.
pub use crate::payment_request::PaymentRequest;

/// `PaymentRequest`, the parsed form of a payment URI.
mod payment_request;
/// Low level URI building blocks: `Uri`, `UriParam`, `UriParamKey`
mod uri;

/// Refuse to parse any input longer than this many KiB.
pub const MAX_INPUT_LEN_KIB: usize = 8;

/// Why a payment URI was rejected.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Payment URI is too long to parse (>{MAX_INPUT_LEN_KIB} KiB)")]
    TooLong,
    #[error("Unsupported payment URI scheme")]
    UnsupportedScheme,
    #[error("Payment URI has no address")]
    MissingAddress,
    #[error("Invalid payment amount: {0}")]
    InvalidAmount(#[source] amount::Error),
    /// Contains the parameter name with its `req-` prefix stripped.
    #[error("Payment URI requires an unsupported parameter: `req-{0}`")]
    UnsupportedRequiredParameter(String),
}

/// The category of a [`ParseError`], without any attached details.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ErrorKind {
    TooLong,
    UnsupportedScheme,
    MissingAddress,
    InvalidAmount,
    UnsupportedRequiredParameter,
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::TooLong => ErrorKind::TooLong,
            Self::UnsupportedScheme => ErrorKind::UnsupportedScheme,
            Self::MissingAddress => ErrorKind::MissingAddress,
            Self::InvalidAmount(_) => ErrorKind::InvalidAmount,
            Self::UnsupportedRequiredParameter(_) =>
                ErrorKind::UnsupportedRequiredParameter,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::TooLong => "too_long",
            Self::UnsupportedScheme => "unsupported_scheme",
            Self::MissingAddress => "missing_address",
            Self::InvalidAmount => "invalid_amount",
            Self::UnsupportedRequiredParameter =>
                "unsupported_required_parameter",
        };
        f.write_str(s)
    }
}
