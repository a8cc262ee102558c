use morille::prelude::*;
use tracing::info;

fn main() -> Result<(), MorilleError> {
    tracing_subscriber::fmt::init();
    let conf: Config = Config::with_yaml_defaults("demos/config.yml")?;
    // Business fields of a unified order, the merchant identity and the
    // nonce are stamped by fill_request.
    let order = Params::new()
        .set_string("body", "morille test order")
        .set_string("out_trade_no", "20260806s0001")
        .set_string("spbill_create_ip", "127.0.0.1")
        .set_string("notify_url", conf.notify_url())
        .set_string("trade_type", "NATIVE")
        .set_int64("total_fee", 888);
    let request = fill_request(order, &conf);
    info!("request ready for mch_id {}", conf.mch_id());
    println!("{}", request.to_xml()?);
    Ok(())
}
