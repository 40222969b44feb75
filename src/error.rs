/*
    Crate level error that wraps the error of every module.
    Library functions return their own module error; this type is
    what the front end deals with.
*/

use crate::{
    address::AddressError,
    config::ConfigError,
    encoding::Base58Error,
    logging::LoggingError,
    util::UtilError
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("address error: {0}")]
    Address(#[from] AddressError),

    #[error("base58 error: {0}")]
    Base58(#[from] Base58Error),

    #[error("byte operation error: {0}")]
    Util(#[from] UtilError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no valid address after {0} attempts")]
    AttemptsExhausted(usize),

    #[error("input closed before a valid address was entered")]
    EndOfInput
}

pub type Result<T> = std::result::Result<T, Error>;
