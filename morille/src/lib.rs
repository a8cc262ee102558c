//! ## Description
//!
//! This crate is a Rust implementation of the flat xml params layer used
//! by WeChat Pay style payment gateways. It allows to build the request
//! maps sent to the gateway and to parse the responses coming back from
//! it.
//!
//! **Morille** keeps every field as a string, the way the gateway wire
//! format does, and marshals the map as one `<xml>` element holding one
//! child element per field. Signing and transport belong to the caller.
//!
//! ## Examples
//!
//! ### Build a request
//!
//! This example assembles a unified order request and marshals it.
//!
//! ```rust
//! use morille::prelude::*;
//!
//! let conf: Config = Config::default_config()
//!     .with_app_id("wx2421b1c4370ec43b")
//!     .with_mch_id("10000100");
//! let order = Params::new()
//!     .set_string("body", "test order")
//!     .set_string("out_trade_no", "20260101s001")
//!     .set_int64("total_fee", 888);
//! let request = fill_request(order, &conf);
//! let xml = request.to_xml().unwrap();
//! assert!(xml.starts_with("<xml>"));
//! ```
//!
//! ### Parse a response
//!
//! This example decodes a gateway response and checks it reported
//! success.
//!
//! ```rust
//! use morille::prelude::*;
//!
//! let body = "<xml><return_code><![CDATA[SUCCESS]]></return_code><result_code><![CDATA[SUCCESS]]></result_code><total_fee>888</total_fee></xml>";
//! let response = check_response(Params::from_xml(body).unwrap()).unwrap();
//! assert!(response.is_success());
//! assert_eq!(response.get_int64("total_fee"), 888);
//! ```
pub use quick_xml;
mod config;
pub use config::Config;
pub mod error;
pub use error::{GatewayError, MorilleError, MorilleResult};
mod gateway_utils;
pub use gateway_utils::{check_response, fill_request, new_nonce_str};
mod params;
pub use params::Params;
pub mod prelude;

/// Sentinel both `return_code` and `result_code` must equal for a
/// response to count as successful.
pub const SUCCESS: &str = "SUCCESS";
/// Sentinel the gateway puts in `return_code` or `result_code` on
/// failure.
pub const FAIL: &str = "FAIL";

// Well known field names of the gateway protocol.
pub const RETURN_CODE: &str = "return_code";
pub const RESULT_CODE: &str = "result_code";
pub const RETURN_MSG: &str = "return_msg";
pub const ERR_CODE: &str = "err_code";
pub const ERR_CODE_DES: &str = "err_code_des";
pub const APP_ID: &str = "appid";
pub const MCH_ID: &str = "mch_id";
pub const NONCE_STR: &str = "nonce_str";
pub const DEVICE_INFO: &str = "device_info";
