use anyhow::Context;
use common::{amount::Amount, denomination::Denomination};
use payment_uri::PaymentRequest;
use serde::Serialize;
use tracing::info;

use crate::cli::{Command, EncodeArgs, ParseArgs, PrivcyUriArgs};

/// The JSON printed by `privcy-uri parse`.
#[derive(Debug, Serialize)]
pub struct ParseOutput {
    pub address: String,
    pub label: Option<String>,
    /// The amount formatted in `unit`, e.g. "1.50".
    pub amount: String,
    pub unit: Denomination,
    /// The exact amount in base units.
    pub amount_units: u64,
}

impl ParseOutput {
    pub fn new(req: PaymentRequest, unit: Denomination) -> Self {
        Self {
            amount: req.amount.format_in(unit),
            amount_units: req.amount.units(),
            address: req.address,
            label: req.label,
            unit,
        }
    }
}

/// Run the selected subcommand and return what should be printed to stdout.
pub fn run(args: &PrivcyUriArgs) -> anyhow::Result<String> {
    let scheme = args.scheme();
    let unit = args.unit();

    match &args.cmd {
        Command::Parse(parse_args) => parse(parse_args, scheme, unit),
        Command::Encode(encode_args) => encode(encode_args, scheme, unit),
    }
}

fn parse(
    args: &ParseArgs,
    scheme: &str,
    unit: Denomination,
) -> anyhow::Result<String> {
    let req = PaymentRequest::parse_with_scheme(&args.uri, scheme)
        .context("Failed to parse payment URI")?;
    info!(address = %req.address, amount = %req.amount, "Parsed payment URI");

    let output = ParseOutput::new(req, unit);
    serde_json::to_string(&output).context("Failed to serialize output")
}

fn encode(
    args: &EncodeArgs,
    scheme: &str,
    unit: Denomination,
) -> anyhow::Result<String> {
    if args.address.is_empty() {
        anyhow::bail!("`--address` can't be empty");
    }

    let amount = match args.amount.as_deref() {
        Some(s) => Amount::parse_in(unit, s)
            .with_context(|| format!("Invalid `--amount` in {unit}"))?,
        None => Amount::ZERO,
    };

    let req = PaymentRequest {
        address: args.address.clone(),
        label: args.label.clone(),
        amount,
    };
    Ok(req.encode_with_scheme(scheme))
}

#[cfg(test)]
mod test {
    use payment_uri::ErrorKind;

    use super::*;

    fn args(
        scheme: Option<&str>,
        unit: Option<Denomination>,
        cmd: Command,
    ) -> PrivcyUriArgs {
        PrivcyUriArgs {
            scheme: scheme.map(str::to_owned),
            unit,
            cmd,
        }
    }

    fn parse_cmd(uri: &str) -> Command {
        Command::Parse(ParseArgs {
            uri: uri.to_owned(),
        })
    }

    fn encode_cmd(
        address: &str,
        amount: Option<&str>,
        label: Option<&str>,
    ) -> Command {
        Command::Encode(EncodeArgs {
            address: address.to_owned(),
            amount: amount.map(str::to_owned),
            label: label.map(str::to_owned),
        })
    }

    #[test]
    fn run_parse() {
        logger::init_for_testing();

        let out = run(&args(
            None,
            None,
            parse_cmd("PRiVCY://PAddr1234?amount=1.5&label=Coffee"),
        ))
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "PAddr1234",
                "label": "Coffee",
                "amount": "1.50",
                "unit": "PRIV",
                "amount_units": 150_000_000_u64,
            }),
        );

        // displayed in the configured unit
        let out = run(&args(
            None,
            Some(Denomination::mPRIV),
            parse_cmd("PRiVCY:PAddr1234?amount=1.5"),
        ))
        .unwrap();
        let json: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(json["amount"], "1500.00");
        assert_eq!(json["unit"], "mPRIV");
        assert_eq!(json["label"], serde_json::Value::Null);
    }

    #[test]
    fn run_parse_errors() {
        logger::init_for_testing();

        let err = run(&args(None, None, parse_cmd("bitcoin:PAddr1234")))
            .unwrap_err();
        let parse_err = err.downcast_ref::<payment_uri::ParseError>().unwrap();
        assert_eq!(parse_err.kind(), ErrorKind::UnsupportedScheme);

        // ...unless that's the configured scheme
        run(&args(Some("bitcoin"), None, parse_cmd("bitcoin:PAddr1234")))
            .unwrap();

        let err = run(&args(
            None,
            None,
            parse_cmd("PRiVCY:PAddr1234?req-message=hi"),
        ))
        .unwrap_err();
        assert!(format!("{err:#}").contains("`req-message`"));
    }

    #[test]
    fn run_encode() {
        logger::init_for_testing();

        let out = run(&args(
            None,
            None,
            encode_cmd("PAddr1234", Some("1.5"), Some("Joe Bloggs")),
        ))
        .unwrap();
        assert_eq!(out, "PRiVCY:PAddr1234?amount=1.5&label=Joe%20Bloggs");

        // the amount is read in the configured unit
        let out = run(&args(
            Some("bitcoin"),
            Some(Denomination::mPRIV),
            encode_cmd("PAddr1234", Some("1500"), None),
        ))
        .unwrap();
        assert_eq!(out, "bitcoin:PAddr1234?amount=1.5");

        // and the output parses back to the same request
        let out =
            run(&args(None, None, encode_cmd("PAddr1234", None, Some(""))))
                .unwrap();
        assert_eq!(out, "PRiVCY:PAddr1234?label=");
        let req = PaymentRequest::parse(&out).unwrap();
        assert_eq!(req.label.as_deref(), Some(""));

        assert!(
            run(&args(None, None, encode_cmd("", None, None))).is_err()
        );
        assert!(
            run(&args(
                None,
                Some(Denomination::uPRIV),
                encode_cmd("PAddr1234", Some("0.001"), None),
            ))
            .is_err()
        );
    }
}
