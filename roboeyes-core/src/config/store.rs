//! Configuration persistence
//!
//! Stores [`EyesConfig`] as postcard binary, e.g. in a flash page.

use super::types::{ConfigError, EyesConfig};

/// Upper bound for an encoded configuration
pub const MAX_ENCODED_SIZE: usize = 64;

/// Serialize a configuration into `buf`
///
/// Returns the used part of the buffer.
pub fn encode<'a>(config: &EyesConfig, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
    postcard::to_slice(config, buf).map_err(|_| ConfigError::Encoding)
}

/// Deserialize and validate a stored configuration
pub fn decode(bytes: &[u8]) -> Result<EyesConfig, ConfigError> {
    let config: EyesConfig = postcard::from_bytes(bytes).map_err(|_| ConfigError::Encoding)?;
    config.validate()?;
    Ok(config)
}
