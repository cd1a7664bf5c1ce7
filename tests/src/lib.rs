//! End-to-end scans against loopback listeners.

#[cfg(test)]
mod scan;
#[cfg(test)]
mod utils;
