//! Data models for the OpenAPI.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - identifier newtypes and [`Environment`]
//! - [`enums`] - instrument, currency, order and operation enums
//! - [`envelope`] - the `{trackingId, payload, status}` wrapper
//! - [`instrument`] - market instruments
//! - [`operation`] - account operations
//! - [`order`] - orders and order placement bodies
//! - [`account`] - broker accounts
//! - [`portfolio`] - security and currency positions

pub mod account;
pub mod enums;
pub mod envelope;
pub mod instrument;
pub mod money;
pub mod operation;
pub mod order;
pub mod portfolio;
pub mod primitives;

pub use account::*;
pub use enums::*;
pub use envelope::*;
pub use instrument::*;
pub use money::*;
pub use operation::*;
pub use order::*;
pub use portfolio::*;
pub use primitives::*;
