pub mod config;
pub mod logging;

pub mod checksum;
pub mod consent;
pub mod credentials;
pub mod error;
pub mod exercises;
pub mod prompt;
pub mod response;
pub mod submission;
pub mod transport;
pub mod workflow;

pub use error::HandinError;
