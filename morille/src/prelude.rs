//! This module contains the most commonly used types, functions and constants.
pub use crate::config::Config;
pub use crate::error::{GatewayError, MorilleError, MorilleResult};
pub use crate::gateway_utils::{check_response, fill_request, new_nonce_str};
pub use crate::params::Params;
pub use crate::{FAIL, SUCCESS};
