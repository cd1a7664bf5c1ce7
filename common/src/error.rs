use std::num::ParseIntError;

use thiserror::Error;

/// Problems with user supplied scan parameters.
///
/// All of these are detected before a scan starts; once probing begins nothing
/// is reported through this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid port range '{0}': expected N or N-M")]
    RangeFormat(String),

    #[error("invalid port '{token}': {source}")]
    InvalidPort {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("port {0} is outside 1-65535")]
    PortOutOfRange(u32),

    #[error("invalid protocol '{0}': expected tcp or udp")]
    InvalidProtocol(String),

    #[error("invalid timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}
