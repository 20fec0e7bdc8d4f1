pub mod analysis;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;
pub mod report;
pub mod server;
pub mod vision;

pub use error::{Error, Result};
