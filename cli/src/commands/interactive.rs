use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use vinscope_common::config::Config;
use vinscope_core::lookup::LookupController;

use crate::commands::decode;
use crate::terminal::{print, render};
use crate::vprint;

const PROMPT: &str = "VIN> ";

/// Reads VINs from stdin until EOF or `quit`, decoding each line as it
/// arrives. A line is only read once the previous lookup has finished.
pub async fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let mut controller: LookupController = decode::controller(cfg)?;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    loop {
        if cfg.quiet == 0 && !cfg.json {
            stdout.write_all(PROMPT.as_bytes()).await?;
            stdout.flush().await?;
        }

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if is_exit(&line) {
            break;
        }

        let state = decode::lookup(&mut controller, &line).await;
        render::render(state, cfg)?;

        if cfg.quiet == 0 && !cfg.json {
            vprint!();
        }
    }

    if !cfg.json {
        print::header("session closed", cfg.quiet);
    }
    Ok(())
}

fn is_exit(line: &str) -> bool {
    matches!(line.trim().to_ascii_lowercase().as_str(), "quit" | "exit")
}
