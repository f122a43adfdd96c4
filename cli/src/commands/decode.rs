use tracing::{Instrument, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

use vinscope_common::config::Config;
use vinscope_common::display::DisplayState;
use vinscope_core::lookup::{LookupController, LookupService};
use vinscope_core::nhtsa::NhtsaClient;

use crate::terminal::render;

/// Decodes one VIN and renders the outcome.
///
/// Returns `true` when results were shown.
pub async fn decode(vin: &str, cfg: &Config) -> anyhow::Result<bool> {
    let mut controller: LookupController = controller(cfg)?;

    let state: &DisplayState = lookup(&mut controller, vin).await;
    render::render(state, cfg)?;

    Ok(state.results_visible())
}

pub fn controller(cfg: &Config) -> anyhow::Result<LookupController> {
    let client: NhtsaClient = NhtsaClient::new(cfg)?;
    Ok(LookupController::new(LookupService::new(Box::new(client))))
}

/// Runs one click with a spinner attached for as long as the request is open.
pub async fn lookup<'a>(controller: &'a mut LookupController, raw: &str) -> &'a DisplayState {
    let span = info_span!("lookup", indicatif.pb_show = true);
    span.pb_set_message(&format!("Decoding {}...", raw.trim()));

    controller.click(raw).instrument(span).await
}
