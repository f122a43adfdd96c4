pub mod decode;
pub mod interactive;

use clap::{ArgAction, Parser, Subcommand};
use vinscope_common::config::{Config, DEFAULT_ENDPOINT};

#[derive(Parser)]
#[command(name = "vinscope")]
#[command(about = "Decode Vehicle Identification Numbers with the NHTSA vPIC API.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Base URL of the vPIC vehicles API
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Reduce output; repeat for bare values only
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print the result as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Ignore HTTP(S)_PROXY settings from the environment
    #[arg(long, global = true)]
    pub no_proxy: bool,

    /// Increase log verbosity; repeat for trace output
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Decode a single VIN
    #[command(alias = "d")]
    Decode { vin: String },
    /// Decode VINs read line by line from standard input
    #[command(alias = "i")]
    Interactive,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            endpoint: self.endpoint.clone(),
            quiet: self.quiet,
            no_banner: self.no_banner,
            json: self.json,
            no_proxy: self.no_proxy,
        }
    }
}
