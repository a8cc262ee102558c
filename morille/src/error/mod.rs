use serde::{Deserialize, Serialize};
use std::fmt;

use crate::params::Params;
use crate::{ERR_CODE, ERR_CODE_DES, RETURN_CODE, RETURN_MSG};

/// # MorilleResult
///
/// ## Description
///
/// This type is used to return a `Result<T>` from the encode, decode and
/// config loading paths of the crate.
pub type MorilleResult<T> = std::result::Result<T, MorilleError>;

pub enum MorilleError {
    XmlError(quick_xml::Error),
    Utf8Error(std::string::FromUtf8Error),
    UnclosedElement(String),
    IoError(std::io::Error),
    YamlError(serde_yaml::Error),
    GatewayError(GatewayError),
}

impl fmt::Display for MorilleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MorilleError::XmlError(e) => write!(f, "Xml error: {}", e),
            MorilleError::Utf8Error(e) => write!(f, "Utf8 error: {}", e),
            MorilleError::UnclosedElement(e) => write!(f, "Unclosed element: {}", e),
            MorilleError::IoError(e) => write!(f, "Io error: {}", e),
            MorilleError::YamlError(e) => write!(f, "Yaml error: {}", e),
            MorilleError::GatewayError(e) => write!(f, "Gateway error: {:?}", e),
        }
    }
}

impl fmt::Debug for MorilleError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MorilleError::XmlError(e) => write!(f, "Xml error: {:?}", e),
            MorilleError::Utf8Error(e) => write!(f, "Utf8 error: {:?}", e),
            MorilleError::UnclosedElement(e) => write!(f, "Unclosed element: {}", e),
            MorilleError::IoError(e) => write!(f, "Io error: {:?}", e),
            MorilleError::YamlError(e) => write!(f, "Yaml error: {:?}", e),
            MorilleError::GatewayError(e) => write!(f, "Gateway error: {:?}", e),
        }
    }
}

impl From<quick_xml::Error> for MorilleError {
    fn from(error: quick_xml::Error) -> Self {
        MorilleError::XmlError(error)
    }
}

impl From<std::string::FromUtf8Error> for MorilleError {
    fn from(error: std::string::FromUtf8Error) -> Self {
        MorilleError::Utf8Error(error)
    }
}

impl From<std::io::Error> for MorilleError {
    fn from(error: std::io::Error) -> Self {
        MorilleError::IoError(error)
    }
}

impl From<serde_yaml::Error> for MorilleError {
    fn from(error: serde_yaml::Error) -> Self {
        MorilleError::YamlError(error)
    }
}

impl From<GatewayError> for MorilleError {
    fn from(error: GatewayError) -> Self {
        MorilleError::GatewayError(error)
    }
}

impl std::error::Error for MorilleError {}

/// # GatewayError
///
/// ## Description
///
/// The failure payload the gateway puts in a response: the communication
/// level `return_code`/`return_msg` pair and the business level
/// `err_code`/`err_code_des` pair. Fields the response did not carry are
/// kept as empty strings, the same leniency the accessors have.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GatewayError {
    return_code: String,
    return_msg: String,
    err_code: String,
    err_code_des: String,
}

impl GatewayError {
    pub fn from_params(params: &Params) -> Self {
        Self {
            return_code: params.get_string(RETURN_CODE),
            return_msg: params.get_string(RETURN_MSG),
            err_code: params.get_string(ERR_CODE),
            err_code_des: params.get_string(ERR_CODE_DES),
        }
    }
    pub fn return_code(&self) -> &str {
        &self.return_code
    }
    pub fn return_msg(&self) -> &str {
        &self.return_msg
    }
    pub fn err_code(&self) -> &str {
        &self.err_code
    }
    pub fn err_code_des(&self) -> &str {
        &self.err_code_des
    }
}
