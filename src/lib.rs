pub mod config;
pub mod model;
pub mod observability;
pub mod store;

pub use config::StoreConfig;
pub use model::{Booking, Ms, Schedule, Span};
pub use store::{ReservationStore, StoreError};
