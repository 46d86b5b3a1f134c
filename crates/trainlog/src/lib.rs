//! `trainlog` - Record and query train departures kept in a JSON file
//!
//! This library provides the record model, the sorted in-memory collection,
//! JSON file storage and table rendering used by the `trains` binary.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod presenter;
pub mod record;
pub mod repository;
pub mod storage;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::TrainRecord;
pub use repository::{Insertion, TrainCollection};
pub use storage::Store;
