use std::io;

use colored::*;

use crate::terminal::{colors, print};

const ABOUT: &str = "\
pscan: a simple and concurrent full connection type tcp/udp port scanner.

Usage:
\tpscan --host <hostname> --proto <protocol> --ports <range>

hostname: name of the target host. Default value: localhost
protocol: can be tcp or udp. Default value: tcp
range: a single port (22) or an inclusive range (20-25). Default value: 1-65535";

pub fn about() -> io::Result<()> {
    print::print(&ABOUT.color(colors::ACCENT).to_string())
}
