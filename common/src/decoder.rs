use async_trait::async_trait;

use crate::error::LookupError;
use crate::record::DecodeResponse;
use crate::vin::Vin;

/// Defines the contract for resolving a VIN into raw vehicle attributes.
#[async_trait]
pub trait VinDecoder: Send + Sync {
    /// Fetches the decode response for `vin`.
    ///
    /// # Returns
    /// * `Ok(DecodeResponse)` - The parsed body of a successful request. It may
    ///   still hold no records or an API-reported error code.
    /// * `Err(LookupError::Transport)` - The request failed, returned a
    ///   non-success status or an unreadable body.
    async fn decode(&self, vin: &Vin) -> Result<DecodeResponse, LookupError>;
}
