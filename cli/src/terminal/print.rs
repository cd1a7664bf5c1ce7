use std::io::{self, Write};

use crate::terminal::{colors, spinner};
use colored::*;

pub const TOTAL_WIDTH: usize = 64;

/// Writes one line to stdout without tearing the spinner.
pub fn print(msg: &str) -> io::Result<()> {
    spinner::suspend(|| {
        let mut out = io::stdout().lock();
        writeln!(out, "{msg}")?;
        out.flush()
    })
}

pub fn banner(no_banner: bool, q_level: u8) -> io::Result<()> {
    if no_banner || q_level > 0 {
        return Ok(());
    }

    let text_content: String = format!("⟦ PSCAN v{} ⟧", env!("CARGO_PKG_VERSION"));
    let text_width: usize = console::measure_text_width(&text_content);
    let text: ColoredString = text_content.bright_green().bold();
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH.saturating_sub(text_width) / 2).bright_black();

    print(&format!("{sep}{text}{sep}"))
}

pub fn header(msg: &str, q_level: u8) -> io::Result<()> {
    if q_level > 0 {
        return Ok(());
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = console::measure_text_width(&formatted);

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().bright_green(),
        "─".repeat(right)
    )
    .bright_black();

    print(&line.to_string())
}

/// A line in the primary colour, used for the scan preamble and summary.
pub fn highlight(msg: &str) -> io::Result<()> {
    print(&msg.color(colors::PRIMARY).to_string())
}

pub fn aligned_line(key: &str, value: &str) -> io::Result<()> {
    let dots: String = ".".repeat(10usize.saturating_sub(key.len()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        key.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value.color(colors::TEXT_DEFAULT)
    ))
}

pub fn end_of_program(q_level: u8) -> io::Result<()> {
    if q_level > 0 {
        return Ok(());
    }
    print(&"═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR).to_string())
}
