//! # vinscope core
//!
//! The lookup engine: validate → fetch → branch → project.
//!
//! * **[`nhtsa`]**: the vPIC HTTP adapter behind [`VinDecoder`](vinscope_common::decoder::VinDecoder).
//! * **[`summary`]**: turns a decoded record into what the user sees.
//! * **[`lookup`]**: the service and controller that drive a single lookup.

pub mod lookup;
pub mod nhtsa;
pub mod summary;
