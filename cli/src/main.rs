mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, decode, interactive};
use terminal::{logging, print};
use vinscope_common::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;
    let cfg: Config = commands.config();

    print::banner(cfg.no_banner || cfg.json, cfg.quiet);

    match commands.command {
        Commands::Decode { vin } => {
            if !cfg.json {
                print::header("decoding vin", cfg.quiet);
            }
            let found: bool = decode::decode(&vin, &cfg).await?;
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Interactive => {
            if !cfg.json {
                print::header("interactive session", cfg.quiet);
            }
            interactive::interactive(&cfg).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
