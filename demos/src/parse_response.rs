use morille::prelude::*;
use tracing::info;

const RESPONSE: &str = r#"<xml>
  <return_code><![CDATA[SUCCESS]]></return_code>
  <return_msg><![CDATA[OK]]></return_msg>
  <appid><![CDATA[wx2421b1c4370ec43b]]></appid>
  <mch_id><![CDATA[10000100]]></mch_id>
  <result_code><![CDATA[SUCCESS]]></result_code>
  <openid><![CDATA[oUpF8uMEb4qRXf22hE3X68TekukE]]></openid>
  <trade_type><![CDATA[NATIVE]]></trade_type>
  <transaction_id><![CDATA[1008450740201411110005820873]]></transaction_id>
  <out_trade_no><![CDATA[20260806s0001]]></out_trade_no>
  <total_fee>888</total_fee>
</xml>"#;

fn main() -> Result<(), MorilleError> {
    tracing_subscriber::fmt::init();
    let response = check_response(Params::from_xml(RESPONSE)?)?;
    info!("decoded {} fields", response.len());
    println!(
        "trade ok, transaction_id: {}",
        response.get_string("transaction_id")
    );
    println!("total_fee: {}", response.get_int64("total_fee"));
    Ok(())
}
