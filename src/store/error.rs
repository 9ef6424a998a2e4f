use crate::model::{Booking, Ms};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    UnknownResource(String),
    InvalidInterval { start: Ms, end: Ms },
    /// Carries the existing booking that blocks the request.
    SlotConflict(Booking),
    BookingNotFound(Booking),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::UnknownResource(name) => write!(f, "unknown resource: {name}"),
            StoreError::InvalidInterval { start, end } => {
                write!(f, "invalid interval [{start}, {end}): start must be before end")
            }
            StoreError::SlotConflict(existing) => write!(
                f,
                "time slot already booked by {} for [{}, {})",
                existing.owner, existing.start, existing.end
            ),
            StoreError::BookingNotFound(booking) => write!(
                f,
                "booking not found: {} [{}, {})",
                booking.owner, booking.start, booking.end
            ),
        }
    }
}

impl std::error::Error for StoreError {}
