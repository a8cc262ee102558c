use crate::config::Config;
use crate::error::{GatewayError, MorilleError, MorilleResult};
/// # gateway_utils
///
/// This module contains functions to stamp the protocol metadata on
/// outgoing requests and to check the responses coming back.
use crate::params::Params;
use crate::{APP_ID, DEVICE_INFO, MCH_ID, NONCE_STR};
use tracing::{debug, warn};
use uuid::Uuid;

/// # new_nonce_str
///
/// ## Description
///
/// Generate the `nonce_str` field of a request: 32 hexadecimal
/// characters from a random v4 uuid.
pub fn new_nonce_str() -> String {
    Uuid::new_v4().simple().to_string()
}
#[test]
fn test_new_nonce_str() {
    let nonce = new_nonce_str();
    assert_eq!(nonce.len(), 32);
    assert!(nonce.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(nonce, new_nonce_str());
}

/// # fill_request
///
/// ## Description
///
/// Stamp the merchant identity on an outgoing request: `appid`,
/// `mch_id` and a fresh `nonce_str`, plus `device_info` when the config
/// carries one. The business fields already set by the caller are left
/// untouched.
///
/// ## Example
///
/// ```rust
/// use morille::prelude::*;
///
/// let conf = Config::default_config().with_app_id("wx2421b1c4370ec43b");
/// let request = fill_request(Params::new().set_string("body", "test order"), &conf);
/// assert_eq!(request.get_string("appid"), "wx2421b1c4370ec43b");
/// ```
pub fn fill_request(params: Params, conf: &Config) -> Params {
    let mut params = params
        .set_string(APP_ID, &conf.app_id())
        .set_string(MCH_ID, &conf.mch_id())
        .set_string(NONCE_STR, &new_nonce_str());
    if !conf.device_info().is_empty() {
        params = params.set_string(DEVICE_INFO, conf.device_info());
    }
    debug!("filled request for mch_id {}", conf.mch_id());
    params
}
#[test]
fn test_fill_request() {
    let conf = Config::default_config()
        .with_app_id("wx2421b1c4370ec43b")
        .with_mch_id("10000100");
    let request = fill_request(Params::new().set_string("body", "test order"), &conf);
    assert_eq!(request.get_string("appid"), "wx2421b1c4370ec43b");
    assert_eq!(request.get_string("mch_id"), "10000100");
    assert_eq!(request.get_string("nonce_str").len(), 32);
    assert_eq!(request.get_string("body"), "test order");
    assert!(!request.contains_key("device_info"));
}
#[test]
fn test_fill_request_with_device_info() {
    let conf = Config::default_config().with_device_info("WEB");
    let request = fill_request(Params::new(), &conf);
    assert_eq!(request.get_string("device_info"), "WEB");
}

/// # check_response
///
/// ## Description
///
/// Pass a successful response through unchanged. Anything else is
/// turned into a [`GatewayError`] carrying the `return_msg` and
/// `err_code`/`err_code_des` fields the gateway reported.
pub fn check_response(params: Params) -> MorilleResult<Params> {
    if params.is_success() {
        return Ok(params);
    }
    let error = GatewayError::from_params(&params);
    warn!("gateway returned failure: {:?}", error);
    Err(MorilleError::GatewayError(error))
}
#[test]
fn test_check_response_success() {
    let response = Params::new()
        .set_string("return_code", "SUCCESS")
        .set_string("result_code", "SUCCESS")
        .set_int64("total_fee", 888);
    let checked = check_response(response).unwrap();
    assert_eq!(checked.get_int64("total_fee"), 888);
}
#[test]
fn test_check_response_failure() {
    let response = Params::new()
        .set_string("return_code", "SUCCESS")
        .set_string("result_code", "FAIL")
        .set_string("err_code", "ORDERPAID")
        .set_string("err_code_des", "order already paid");
    match check_response(response) {
        Err(MorilleError::GatewayError(error)) => {
            assert_eq!(error.return_code(), "SUCCESS");
            assert_eq!(error.err_code(), "ORDERPAID");
            assert_eq!(error.err_code_des(), "order already paid");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}
