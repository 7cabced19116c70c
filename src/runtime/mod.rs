//! Runtime types shared by every part of the API.

pub mod config;
pub use config::{Config, InitializeConfigError};

mod error;
pub use error::{Error, Result};

pub mod panic_hook;
