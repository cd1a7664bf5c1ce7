use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use pscan_common::config::Config;
use pscan_common::network::port::ProbeResult;
use pscan_core::report::{self, ReportSink, ScanSummary};
use pscan_core::scanner::{ScanCoordinator, ScanJob};
use tracing::{error, info};

use crate::terminal::{format, print, spinner};

/// Prints open ports as they arrive.
struct TerminalSink {
    open: usize,
    write_failed: bool,
}

impl ReportSink for TerminalSink {
    fn on_open(&mut self, result: &ProbeResult) {
        self.open += 1;
        if let Err(e) = print::print(&format::result_row(result)) {
            // keep draining so the producers finish
            if !self.write_failed {
                error!("Failed to write result: {e}");
            }
            self.write_failed = true;
        }
    }

    fn on_progress(&mut self, done: usize, total: usize) {
        spinner::report_scan_progress(done, total, self.open);
    }
}

pub async fn scan(job: ScanJob, cfg: &Config) -> anyhow::Result<()> {
    print::header("starting scanner", cfg.quiet)?;

    let started = Instant::now();
    let started_at = Local::now();
    print::highlight(&format!(
        "Starting scan at {}\nHost: {}",
        format::start_time(&started_at),
        job.host
    ))
    .context("writing scan preamble")?;

    if cfg.quiet == 0 {
        print::aligned_line("Protocol", job.protocol.as_str())?;
        print::aligned_line("Ports", &job.range.to_string())?;
        print::aligned_line("Timeout", &format::elapsed(job.timeout))?;
    }
    print::highlight(format::RESULT_COLUMNS)?;

    let total: usize = job.range.width();
    spinner::get_spinner().set_message(format!("Probing {total} ports..."));
    let coordinator = ScanCoordinator::new();
    let rx = coordinator.run(job);

    let mut sink = TerminalSink {
        open: 0,
        write_failed: false,
    };
    let summary: ScanSummary = report::drain_since(rx, total, started, &mut sink).await;
    spinner::get_spinner().finish_and_clear();

    info!("{} of {} ports open", summary.open, summary.total);
    print::highlight(&format!("\nTook {} to complete", format::elapsed(summary.elapsed)))?;
    print::end_of_program(cfg.quiet)?;

    if sink.write_failed {
        anyhow::bail!("some results could not be written to stdout");
    }
    Ok(())
}
