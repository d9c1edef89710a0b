#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/ethrpc-rs/ethrpc/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
pub use error::HexError;

mod hex;
pub use hex::{HEX_PREFIX_LEN, expect_str, json_type_name, strip_hex_prefix, validate_hex_string};

mod int;
pub use int::HexInt;

mod big;
pub use big::HexBig;

pub use num_bigint::BigUint;
