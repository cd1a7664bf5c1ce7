//! # pscan engine
//!
//! * [`network`]: single connection attempts per transport.
//! * [`prober`]: the [`prober::Prober`] seam that turns an attempt into a
//!   [`pscan_common::network::port::ProbeResult`].
//! * [`scanner`]: fans one probe task out per port and fans the results back in
//!   through a single channel.
//! * [`report`]: drains that channel into a [`report::ReportSink`].

pub mod network;
pub mod prober;
pub mod report;
pub mod scanner;
