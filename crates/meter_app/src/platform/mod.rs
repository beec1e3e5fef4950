pub mod app;
pub mod cli;
pub mod clock;
pub mod config;
pub mod effects;
pub mod logging;
pub mod render;
pub mod ticker;

use std::io;
use std::time::Duration;

use anyhow::Context;

use cli::{Cli, Command, LiveArgs};

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(
        cli.log.into(),
        meter_logging::level_for_verbosity(cli.verbose),
    );

    let mut config = config::load_config(&cli.config)?;
    cli.settings.apply_to(&mut config);

    let mut host = app::Host::new(clock::SystemClock, io::stdout(), Duration::from_secs(1));
    host.apply_settings(&config)?;

    match cli.command.unwrap_or(Command::Live(LiveArgs::default())) {
        Command::Live(args) => host.run_live(&args, config.page_url())?,
        Command::Estimate(args) => host.run_estimate(args.duration)?,
    }

    if cli.json {
        let json =
            serde_json::to_string_pretty(&host.view()).context("failed to serialize view")?;
        println!("{json}");
    }
    Ok(())
}
