pub mod about;
pub mod scan;

use std::time::Duration;

use clap::{ArgAction, Parser};
use pscan_common::config::{self, Config, DEFAULT_HOST};
use pscan_common::network::{protocol::Protocol, range::PortRange};
use pscan_core::scanner::ScanJob;

#[derive(Parser, Debug)]
#[command(name = "pscan", version)]
#[command(about = "A simple and concurrent full connection TCP/UDP port scanner.")]
pub struct CommandLine {
    /// Name or address of the target host
    #[arg(long, value_name = "HOSTNAME", default_value = DEFAULT_HOST)]
    pub host: String,

    /// Protocol to use: tcp or udp
    #[arg(long = "proto", value_name = "PROTOCOL", default_value = "tcp")]
    pub protocol: Protocol,

    /// Port or port range to scan, e.g. 22 or 20-25
    #[arg(short, long, value_name = "RANGE", default_value = "1-65535")]
    pub ports: PortRange,

    /// Per-port connection timeout in seconds
    #[arg(
        short,
        long,
        value_name = "SECONDS",
        default_value = "60",
        value_parser = config::parse_timeout
    )]
    pub timeout: Duration,

    /// About pscan
    #[arg(long)]
    pub about: bool,

    /// Hide the banner
    #[arg(long)]
    pub no_banner: bool,

    /// Less output (banner, headers and info logs)
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// More log output, repeat for trace level
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn job(&self) -> ScanJob {
        ScanJob {
            host: self.host.clone(),
            protocol: self.protocol,
            range: self.ports,
            timeout: self.timeout,
        }
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            no_banner: self.no_banner,
        }
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
