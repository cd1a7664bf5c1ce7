//! # Port Range Model
//!
//! Parses user input such as `22`, `20-25` or `100-20` into a normalized,
//! inclusive [`PortRange`]. The bounds are always ordered, so a reversed
//! range describes exactly the same ports as its forward form.

use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ConfigError;

pub const MIN_PORT: u16 = 1;
pub const MAX_PORT: u16 = u16::MAX;

/// A continuous range of ports, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    start: u16,
    end: u16,
}

impl PortRange {
    /// Builds a range from two bounds given in any order.
    pub fn new(a: u16, b: u16) -> Result<Self, ConfigError> {
        for port in [a, b] {
            if port < MIN_PORT {
                return Err(ConfigError::PortOutOfRange(port.into()));
            }
        }
        Ok(Self {
            start: a.min(b),
            end: a.max(b),
        })
    }

    pub fn single(port: u16) -> Result<Self, ConfigError> {
        Self::new(port, port)
    }

    pub fn start(&self) -> u16 {
        self.start
    }

    pub fn end(&self) -> u16 {
        self.end
    }

    /// Number of ports covered, never zero.
    pub fn width(&self) -> usize {
        usize::from(self.end - self.start) + 1
    }

    pub fn iter(&self) -> RangeInclusive<u16> {
        self.start..=self.end
    }
}

impl Default for PortRange {
    fn default() -> Self {
        Self {
            start: MIN_PORT,
            end: MAX_PORT,
        }
    }
}

impl IntoIterator for PortRange {
    type Item = u16;
    type IntoIter = RangeInclusive<u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PortRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for PortRange {
    type Err = ConfigError;

    /// Parses `N` or `N-M`.
    ///
    /// Exactly one or two `-` separated tokens are accepted, each a base 10
    /// integer within `1..=65535`. The result is normalized so that
    /// `start <= end`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split('-').collect();

        match tokens.as_slice() {
            [single] => Self::single(parse_port(single)?),
            [first, second] => Self::new(parse_port(first)?, parse_port(second)?),
            _ => Err(ConfigError::RangeFormat(s.to_string())),
        }
    }
}

fn parse_port(token: &str) -> Result<u16, ConfigError> {
    let token = token.trim();
    let value: u32 = token.parse().map_err(|source| ConfigError::InvalidPort {
        token: token.to_string(),
        source,
    })?;

    match u16::try_from(value) {
        Ok(port) if port >= MIN_PORT => Ok(port),
        _ => Err(ConfigError::PortOutOfRange(value)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
