//! # privcy-uri
//!
//! A small command line front end for the `payment-uri` crate.
//!
//! ```bash
//! $ privcy-uri parse 'PRiVCY:PAddr1234?amount=1.5&label=Coffee'
//! {"address":"PAddr1234","label":"Coffee","amount":"1.50","unit":"PRIV","amount_units":150000000}
//!
//! $ privcy-uri --unit mPRIV encode --address PAddr1234 --amount 1500
//! PRiVCY:PAddr1234?amount=1.5
//! ```
//!
//! Every option can also be set from the environment (or a `.env` file):
//!
//! + `PAYMENT_URI_SCHEME=<scheme>` (default=PRiVCY)
//! + `PRIVCY_UNIT=<PRIV|mPRIV|uPRIV>` (default=PRIV)

pub mod cli;
pub mod run;
