pub mod config;
pub mod errors;

pub use config::{HeaderMode, RunConfig};
pub use errors::{PayloadError, Result};
