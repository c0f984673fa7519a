//! Base58 codec for binary identifiers, plus the pieces of the `base58` command line tool.

pub mod base58;
pub mod base_common;
pub mod batcher;
pub mod chronometer;
pub mod cli;
pub mod configuration;
pub mod error;
pub mod hex;
pub mod logger;
pub mod thread_pool;

pub use base58::{decode, encode, ALPHABET};
pub use base58::decode::Error as DecodeError;
