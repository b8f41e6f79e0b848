pub mod boundary;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod linkage;
pub mod manifest;
pub mod range;
pub mod schema;
pub mod ui;

pub use error::{GateError, Result};
