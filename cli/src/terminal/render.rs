//! Projects a [`DisplayState`] onto the terminal.
//!
//! Exactly one region is drawn: the results block or the error line.

use colored::*;
use vinscope_common::config::Config;
use vinscope_common::display::{DisplayState, NOT_AVAILABLE, VehicleSummary};

use crate::terminal::{colors, print};

const COUNTRY: &str = "Country";
const MANUFACTURER: &str = "Manufacturer";
const DESCRIPTION: &str = "Description";
const MODEL_YEAR: &str = "Model Year";

/// What ends up on screen for one state, before any styling.
#[derive(Debug, PartialEq, Eq)]
enum Layout<'a> {
    Nothing,
    Json(String),
    /// One unlabeled line per value.
    Bare(Vec<&'a str>),
    Block(Vec<(&'static str, &'a str)>),
    Failure(&'a str),
}

pub fn render(state: &DisplayState, cfg: &Config) -> anyhow::Result<()> {
    match layout(state, cfg)? {
        Layout::Nothing => {}
        Layout::Json(json) => print::print(&json),
        Layout::Bare(lines) => lines.into_iter().for_each(print::print),
        Layout::Block(rows) => {
            print::header("vehicle", cfg.quiet);
            let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

            for (key, value) in rows {
                print::aligned_line(key, styled(value), key_width);
            }
        }
        Layout::Failure(message) => print::failure(message),
    }

    Ok(())
}

fn layout<'a>(state: &'a DisplayState, cfg: &Config) -> anyhow::Result<Layout<'a>> {
    if cfg.json {
        return Ok(Layout::Json(serde_json::to_string_pretty(state)?));
    }

    let layout = match state {
        DisplayState::Idle => Layout::Nothing,
        DisplayState::Results(summary) if cfg.quiet >= 2 => {
            Layout::Bare(rows(summary).into_iter().map(|(_, value)| value).collect())
        }
        DisplayState::Results(summary) => Layout::Block(rows(summary).to_vec()),
        DisplayState::Error { message } if cfg.quiet >= 2 => Layout::Bare(vec![message.as_str()]),
        DisplayState::Error { message } => Layout::Failure(message),
    };

    Ok(layout)
}

fn rows(summary: &VehicleSummary) -> [(&'static str, &str); 4] {
    [
        (COUNTRY, summary.country.as_str()),
        (MANUFACTURER, summary.manufacturer.as_str()),
        (DESCRIPTION, summary.description.as_str()),
        (MODEL_YEAR, summary.model_year.as_str()),
    ]
}

fn styled(value: &str) -> ColoredString {
    if value == NOT_AVAILABLE {
        value.color(colors::NOT_AVAILABLE).italic()
    } else {
        value.color(colors::ACCENT)
    }
}
