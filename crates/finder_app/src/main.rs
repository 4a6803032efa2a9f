mod platform;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    let cli = platform::config::Cli::parse();
    finder_logging::initialize(cli.log_destination(), cli.log_level());
    platform::run_app(cli.app_config())
}
