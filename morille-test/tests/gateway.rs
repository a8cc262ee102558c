use morille::prelude::*;

#[test]
fn test_request_roundtrip() {
    let conf = Config::default_config()
        .with_app_id("wx2421b1c4370ec43b")
        .with_mch_id("10000100");
    let order = Params::new()
        .set_string("body", "test order")
        .set_string("out_trade_no", "20260101s001")
        .set_int64("total_fee", 888);
    let request = fill_request(order, &conf);
    let xml = request.to_xml().unwrap();
    let decoded = Params::from_xml(&xml).unwrap();
    assert_eq!(decoded, request);
    assert_eq!(decoded.get_string("appid"), "wx2421b1c4370ec43b");
    assert_eq!(decoded.get_string("mch_id"), "10000100");
    assert_eq!(decoded.get_string("nonce_str").len(), 32);
    assert_eq!(decoded.get_int64("total_fee"), 888);
}

#[test]
fn test_parse_gateway_response() {
    let body = "<xml>\n  <return_code><![CDATA[SUCCESS]]></return_code>\n  <return_msg><![CDATA[OK]]></return_msg>\n  <result_code><![CDATA[SUCCESS]]></result_code>\n  <transaction_id><![CDATA[1008450740201411110005820873]]></transaction_id>\n  <total_fee>1</total_fee>\n</xml>";
    let response = check_response(Params::from_xml(body).unwrap()).unwrap();
    assert!(response.is_success());
    assert_eq!(response.get_int64("total_fee"), 1);
    assert_eq!(
        response.get_string("transaction_id"),
        "1008450740201411110005820873"
    );
}

#[test]
fn test_gateway_failure_is_surfaced() {
    let body = "<xml><return_code><![CDATA[SUCCESS]]></return_code><result_code><![CDATA[FAIL]]></result_code><err_code><![CDATA[ORDERPAID]]></err_code><err_code_des><![CDATA[order already paid]]></err_code_des></xml>";
    let error = check_response(Params::from_xml(body).unwrap()).unwrap_err();
    match error {
        MorilleError::GatewayError(error) => {
            assert_eq!(error.err_code(), "ORDERPAID");
            assert_eq!(error.err_code_des(), "order already paid");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_truncated_response_fails() {
    assert!(Params::from_xml("<xml><return_code>SUCCESS").is_err());
}
