mod analysis;
mod config;
mod import;
mod models;
mod run;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let config = config::PortfolioConfig::builtin();

    if args.len() < 2 {
        run::print_usage();
        return Ok(());
    }
    run::as_cli(&args, &config)
}
