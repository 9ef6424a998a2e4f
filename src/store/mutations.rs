use tracing::debug;

use crate::model::*;
use crate::observability::{BOOKINGS_ACTIVE, CANCELLATIONS_TOTAL, RESERVATIONS_TOTAL};

use super::conflict::{check_no_conflict, validate_interval};
use super::{ReservationStore, StoreError};

impl ReservationStore {
    /// Book `[start, end)` on `resource` for `owner`.
    ///
    /// The interval is validated before the resource is looked up, so an empty
    /// or reversed interval is reported as `InvalidInterval` even for an
    /// unknown resource. On error the store is left untouched.
    pub fn reserve(
        &self,
        owner: impl Into<String>,
        resource: &str,
        start: Ms,
        end: Ms,
    ) -> Result<Booking, StoreError> {
        let result = self.try_reserve(owner.into(), resource, start, end);
        metrics::counter!(RESERVATIONS_TOTAL, "status" => status_label(&result)).increment(1);
        result
    }

    fn try_reserve(
        &self,
        owner: String,
        resource: &str,
        start: Ms,
        end: Ms,
    ) -> Result<Booking, StoreError> {
        let span = validate_interval(start, end)?;
        let mut schedule = self
            .schedules
            .get_mut(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;

        // Guard is held across check and insert.
        check_no_conflict(&schedule, &span)?;

        let booking = Booking::new(owner, start, end);
        schedule.insert(booking.clone());
        drop(schedule);

        debug!(resource, owner = %booking.owner, start, end, "reserved");
        metrics::gauge!(BOOKINGS_ACTIVE).increment(1.0);
        Ok(booking)
    }

    /// Remove the first booking on `resource` equal to `booking` in start, end and owner.
    pub fn cancel(&self, booking: &Booking, resource: &str) -> Result<(), StoreError> {
        let result = self.try_cancel(booking, resource);
        metrics::counter!(CANCELLATIONS_TOTAL, "status" => status_label(&result)).increment(1);
        result
    }

    fn try_cancel(&self, booking: &Booking, resource: &str) -> Result<(), StoreError> {
        let mut schedule = self
            .schedules
            .get_mut(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;
        schedule
            .remove(booking)
            .ok_or_else(|| StoreError::BookingNotFound(booking.clone()))?;
        drop(schedule);

        debug!(
            resource,
            owner = %booking.owner,
            start = booking.start,
            end = booking.end,
            "cancelled"
        );
        metrics::gauge!(BOOKINGS_ACTIVE).decrement(1.0);
        Ok(())
    }
}

/// Short label for the outcome of a mutation, used as a metric label.
pub(super) fn status_label<T>(result: &Result<T, StoreError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(StoreError::UnknownResource(_)) => "unknown_resource",
        Err(StoreError::InvalidInterval { .. }) => "invalid",
        Err(StoreError::SlotConflict(_)) => "conflict",
        Err(StoreError::BookingNotFound(_)) => "not_found",
    }
}
