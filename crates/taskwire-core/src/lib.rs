pub mod config;
pub mod error;
pub mod security;

pub use config::TaskwireConfig;
pub use error::{Result, TaskwireError};
pub use security::SecurityRisk;
