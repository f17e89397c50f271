pub mod cli;
pub mod clients;
pub mod collector;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;
pub mod writers;

pub use error::{CollectorError, Result};
