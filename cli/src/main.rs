mod commands;
mod terminal;

use commands::{CommandLine, about, scan};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose, commands.quiet);

    if commands.about {
        about::about()?;
        return Ok(());
    }

    let cfg = commands.config();
    print::banner(cfg.no_banner, cfg.quiet)?;

    scan::scan(commands.job(), &cfg).await
}
