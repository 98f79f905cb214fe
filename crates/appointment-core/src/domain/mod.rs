//! Domain Layer
//!
//! The appointment entity and the error type shared by every layer.
//! No storage or UI concerns live here.

mod appointment;
mod error;

pub use appointment::{parse_date, Appointment};
pub use error::{StoreError, StoreResult};
