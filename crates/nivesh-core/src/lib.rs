pub mod config;
pub mod error;
pub mod types;

pub use config::NiveshConfig;
pub use error::{NiveshError, Result};
pub use types::*;
