mod codec;
mod config;
mod error;
mod export;
mod ledger;
mod logging;
mod models;
mod report;
mod run;
mod ui;
mod validate;

use anyhow::Result;

fn main() -> Result<()> {
    logging::init();

    let mut args: Vec<String> = std::env::args().collect();
    let config = config::Config::resolve(&mut args)?;
    let ledger = ledger::Ledger::open(&config.ledger_path);
    let theme = ui::Theme::new(config.color);

    match args.len() {
        0 | 1 => run::as_interactive(&ledger, theme),
        _ => run::as_cli(&args, &ledger, theme),
    }
}
