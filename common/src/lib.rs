//! Shared data model for the `pscan` workspace.
//!
//! Everything here is pure: parsing, normalization and the static service
//! table. No networking happens in this crate.

pub mod config;
pub mod error;
pub mod network;
