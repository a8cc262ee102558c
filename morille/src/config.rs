use regex::Captures;
use regex::Regex;
use serde::Deserialize;
use std::borrow::Cow;
use std::env;
use std::fs::File;
use std::io::Read;

use crate::error::MorilleResult;

/// # Config
///
/// ## Description
///
/// This struct is used to store the merchant side configuration of the
/// payment gateway
/// - the app id
/// - the merchant id
/// - the notify url
/// - the device info
/// - the fee type.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    app_id: Option<String>,
    mch_id: Option<String>,
    notify_url: Option<String>,
    device_info: Option<String>,
    fee_type: Option<String>,
}

impl Config {
    // Create a default config
    pub fn default_config() -> Self {
        Self {
            app_id: Some("".to_string()),
            mch_id: Some("".to_string()),
            notify_url: Some("".to_string()),
            device_info: Some("".to_string()),
            fee_type: Some("CNY".to_string()),
        }
    }

    // Function to load from a YAML file and merge with default config
    pub fn with_yaml_defaults(file_path: &str) -> MorilleResult<Self> {
        let default_config = Config::default_config();

        let mut file = File::open(file_path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        contents = expand_var(&contents).to_string();
        let overrides: Config = serde_yaml::from_str(&contents)?;
        Ok(default_config.merge(overrides))
    }

    // Function to merge two configs
    fn merge(self, other: Config) -> Config {
        Config {
            app_id: other.app_id.or(self.app_id),
            mch_id: other.mch_id.or(self.mch_id),
            notify_url: other.notify_url.or(self.notify_url),
            device_info: other.device_info.or(self.device_info),
            fee_type: other.fee_type.or(self.fee_type),
        }
    }
    // Get the app id
    pub fn app_id(&self) -> String {
        self.app_id.clone().unwrap()
    }
    // Get the merchant id
    pub fn mch_id(&self) -> String {
        self.mch_id.clone().unwrap()
    }
    // Get the notify url
    pub fn notify_url(&self) -> &str {
        self.notify_url.as_ref().unwrap()
    }
    // Get the device info
    pub fn device_info(&self) -> &str {
        self.device_info.as_ref().unwrap()
    }
    // Get the fee type
    pub fn fee_type(&self) -> &str {
        self.fee_type.as_ref().unwrap()
    }
    // Set the app id
    pub fn with_app_id(&self, app_id: &str) -> Config {
        let mut new_config = self.clone();
        new_config.app_id = Some(app_id.to_string());
        new_config
    }
    // Set the merchant id
    pub fn with_mch_id(&self, mch_id: &str) -> Config {
        let mut new_config = self.clone();
        new_config.mch_id = Some(mch_id.to_string());
        new_config
    }
    // Set the notify url
    pub fn with_notify_url(&self, notify_url: &str) -> Config {
        let mut new_config = self.clone();
        new_config.notify_url = Some(notify_url.to_string());
        new_config
    }
    // Set the device info
    pub fn with_device_info(&self, device_info: &str) -> Config {
        let mut new_config = self.clone();
        new_config.device_info = Some(device_info.to_string());
        new_config
    }
}

fn expand_var(raw_config: &str) -> Cow<str> {
    let re = Regex::new(r"\$\{([a-zA-Z_][0-9a-zA-Z_]*)\}").unwrap();
    re.replace_all(&raw_config, |caps: &Captures| match env::var(&caps[1]) {
        Ok(val) => val,
        Err(_) => (&caps[0]).to_string(),
    })
}

#[test]
fn test_expand_var() {
    env::set_var("MCH_ID", "10000100");
    assert_eq!(expand_var("mch_id: ${MCH_ID}"), "mch_id: 10000100");
    env::remove_var("MCH_ID");
    assert_eq!(expand_var("mch_id: ${MCH_ID}"), "mch_id: ${MCH_ID}");
}

#[test]
fn test_config_default() {
    let config = Config::default_config();
    assert_eq!(config.app_id(), "");
    assert_eq!(config.fee_type(), "CNY");
}

#[test]
fn test_config_with_yaml_defaults() {
    let config = Config::with_yaml_defaults("../demos/config.yml").unwrap();
    assert_eq!(config.app_id(), "wx2421b1c4370ec43b");
    assert_eq!(config.mch_id(), "10000100");
    assert_eq!(config.notify_url(), "http://127.0.0.1/notify");
    assert_eq!(config.fee_type(), "CNY");
}

#[test]
fn test_config_with_setters() {
    let config = Config::default_config()
        .with_app_id("wx2421b1c4370ec43b")
        .with_mch_id("10000100");
    assert_eq!(config.app_id(), "wx2421b1c4370ec43b");
    assert_eq!(config.mch_id(), "10000100");
    assert_eq!(config.device_info(), "");
}
