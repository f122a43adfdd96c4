//! # vinscope common
//!
//! Domain types shared by the lookup engine and the terminal front end.
//!
//! * **[`vin`]**: the normalized Vehicle Identification Number.
//! * **[`record`]**: the wire shape of the vPIC `DecodeVinValues` response.
//! * **[`display`]**: what the user currently sees.
//! * **[`error`]**: the user-facing failure kinds of a lookup.
//! * **[`decoder`]**: the port the lookup engine calls to resolve a VIN.
//! * **[`config`]**: runtime settings collected from the command line.

pub mod config;
pub mod decoder;
pub mod display;
pub mod error;
pub mod record;
pub mod vin;
