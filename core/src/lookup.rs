//! # VIN Lookup
//!
//! [`LookupService`] runs one lookup from raw input to a [`VehicleSummary`].
//! [`LookupController`] wraps it with the single piece of state the user sees.

use tracing::debug;

use vinscope_common::decoder::VinDecoder;
use vinscope_common::display::{DisplayState, VehicleSummary};
use vinscope_common::error::LookupError;
use vinscope_common::record::DecodeResponse;
use vinscope_common::vin::Vin;

use crate::summary;

/// Application service for VIN lookups.
///
/// Delegates the network call to the [`VinDecoder`] port and keeps the
/// branching on the response here.
pub struct LookupService {
    decoder: Box<dyn VinDecoder>,
}

impl LookupService {
    pub fn new(decoder: Box<dyn VinDecoder>) -> Self {
        Self { decoder }
    }

    /// Executes a lookup for the raw user input.
    ///
    /// 1. **Validation**: normalize and length-check; no request on failure.
    /// 2. **Fetch**: one call to the decoder.
    /// 3. **Projection**: first record to summary, unless the API flagged an error.
    pub async fn lookup(&self, raw: &str) -> Result<VehicleSummary, LookupError> {
        let vin: Vin = Vin::parse(raw)?;
        debug!("Decoding VIN {vin}");

        let response: DecodeResponse = self.decoder.decode(&vin).await?;
        let record = response.first_record()?;

        summary::summarize(record)
    }
}

/// Holds the state produced by the most recent lookup.
///
/// Every click replaces the state; nothing from earlier lookups survives.
/// `click` borrows the controller mutably, so lookups cannot overlap.
pub struct LookupController {
    service: LookupService,
    state: DisplayState,
}

impl LookupController {
    pub fn new(service: LookupService) -> Self {
        Self {
            service,
            state: DisplayState::Idle,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub async fn click(&mut self, raw: &str) -> &DisplayState {
        self.state = DisplayState::Idle;

        let outcome = self.service.lookup(raw).await;
        if let Err(err) = &outcome {
            debug!("Lookup failed: {err:?}");
        }

        self.state = DisplayState::from(outcome);
        &self.state
    }
}
