//! Error handling for Liouville.
//! One root enum for spectrum operations, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod spectrum_error;

pub use config_error::ConfigError;
pub use error_code::SpectrumErrorCode;
pub use spectrum_error::{SpectrumError, SpectrumResult};
