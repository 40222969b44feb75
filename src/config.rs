/*
    Command line configuration for the front end.

    Every flag can also be set through an environment variable:
    - ADDRCONV_ADDRESS       convert this address and exit
    - ADDRCONV_LOG_LEVEL     trace, debug, info, warn or error (default: warn)
    - ADDRCONV_JSON_LOGS     emit logs as JSON lines
    - ADDRCONV_MAX_ATTEMPTS  give up after this many rejected addresses (0 = never)

    None of this reaches the conversion itself, which takes no configuration.
*/

use crate::logging::LogLevel;
use clap::Parser;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {0}: {1}")]
    InvalidValue(String, String)
}

#[derive(Debug, Clone, Parser)]
#[command(name = "btc-addrconv")]
#[command(about = "Convert a legacy P2PKH address into its P2SH-P2WPKH equivalent")]
pub struct Config {
    /// P2PKH address to convert. Prompts interactively when omitted.
    #[arg(short, long, env = "ADDRCONV_ADDRESS")]
    pub address: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ADDRCONV_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long, env = "ADDRCONV_JSON_LOGS")]
    pub json_logs: bool,

    /// Stop prompting after this many rejected addresses (0 = never stop)
    #[arg(short, long, env = "ADDRCONV_MAX_ATTEMPTS", default_value_t = 0)]
    pub max_attempts: usize
}

impl Config {
    pub fn log_level(&self) -> Result<LogLevel, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidValue("log level".to_string(), self.log_level.clone()))
    }

    /// Attempt limit for the interactive loop, `None` when unlimited.
    pub fn attempt_limit(&self) -> Option<usize> {
        match self.max_attempts {
            0 => None,
            n => Some(n)
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.log_level()?;
        if let Some(address) = &self.address {
            if address.trim().is_empty() {
                return Err(ConfigError::InvalidValue("address".to_string(), address.clone()))
            }
        }

        Ok(())
    }
}
