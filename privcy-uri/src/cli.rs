//! privcy-uri CLI

use argh::FromArgs;
use common::{denomination::Denomination, or_env::OrEnvExt as _};

/// Parse and encode PRiVCY payment URIs.
// NOTE: Keep the env var names here in sync with the crate docs in `lib.rs`.
#[derive(Debug, FromArgs)]
pub struct PrivcyUriArgs {
    /// optional: the URI scheme to accept and produce.
    ///
    /// Default: "PRiVCY".
    /// Env: `PAYMENT_URI_SCHEME`.
    #[argh(option)]
    pub scheme: Option<String>,

    /// optional: the unit amounts are displayed and entered in.
    ///
    /// Options: ["PRIV", "mPRIV", "uPRIV"].
    /// Default: "PRIV".
    /// Env: `PRIVCY_UNIT`.
    #[argh(option)]
    pub unit: Option<Denomination>,

    #[argh(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub enum Command {
    Parse(ParseArgs),
    Encode(EncodeArgs),
}

/// Parse a payment URI and print it as JSON.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "parse")]
pub struct ParseArgs {
    /// the payment URI, e.g. `PRiVCY:<address>?amount=1.5`.
    #[argh(positional)]
    pub uri: String,
}

/// Build a payment URI from its parts.
#[derive(Debug, FromArgs)]
#[argh(subcommand, name = "encode")]
pub struct EncodeArgs {
    /// required: the payment destination.
    #[argh(option)]
    pub address: String,

    /// optional: the requested amount, in `--unit`.
    #[argh(option)]
    pub amount: Option<String>,

    /// optional: a label for the recipient.
    #[argh(option)]
    pub label: Option<String>,
}

impl PrivcyUriArgs {
    /// Parse args from the process' command line, then fill any unset options
    /// from env.
    pub fn from_env() -> anyhow::Result<Self> {
        let mut args = argh::from_env::<Self>();
        args.or_env_mut()?;
        Ok(args)
    }

    /// Fill from env vars if they're set
    pub fn or_env_mut(&mut self) -> anyhow::Result<()> {
        self.scheme.or_env_mut("PAYMENT_URI_SCHEME")?;
        self.unit.or_env_mut("PRIVCY_UNIT")?;
        Ok(())
    }

    pub fn scheme(&self) -> &str {
        self.scheme
            .as_deref()
            .unwrap_or(payment_uri::PaymentRequest::URI_SCHEME)
    }

    pub fn unit(&self) -> Denomination {
        self.unit.unwrap_or_default()
    }
}
