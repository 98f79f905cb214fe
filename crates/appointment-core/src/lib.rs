//! Appointment Core
//!
//! Layered like the app it backs:
//! - domain: the appointment entity and the error type
//! - storage: key-value persistence seam and the on-disk codec
//! - book: the appointment list state machine (filter, pagination, edit buffer)

mod book;
mod config;
mod domain;
mod pagination;
mod storage;


pub use book::{AppointmentBook, Draft, EditBuffer, Outcome};
pub use config::{BookConfig, DEFAULT_ITEMS_PER_PAGE, DEFAULT_STORAGE_KEY};
pub use domain::{parse_date, Appointment, StoreError, StoreResult};
pub use pagination::Pagination;
pub use storage::{codec, KeyValueStore, MemoryStorage};
