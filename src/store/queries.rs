use crate::model::*;

use super::conflict::{check_no_conflict, validate_interval};
use super::{ReservationStore, StoreError};

impl ReservationStore {
    /// Bookings of `resource`, sorted by start. The returned vector is a copy.
    pub fn schedule_for_resource(&self, resource: &str) -> Result<Vec<Booking>, StoreError> {
        let schedule = self
            .schedules
            .get(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;
        Ok(schedule.bookings().to_vec())
    }

    /// Bookings of `resource` overlapping `[start, end)`, sorted by start.
    /// A booking that only touches the window's edge is not included.
    pub fn schedule_between(
        &self,
        resource: &str,
        start: Ms,
        end: Ms,
    ) -> Result<Vec<Booking>, StoreError> {
        let span = validate_interval(start, end)?;
        let schedule = self
            .schedules
            .get(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;
        Ok(schedule.overlapping(&span).cloned().collect())
    }

    pub fn resources(&self) -> &[String] {
        &self.resources
    }

    pub fn contains_resource(&self, resource: &str) -> bool {
        self.schedules.contains_key(resource)
    }

    /// Whether `reserve` would accept `[start, end)` on `resource` right now.
    pub fn is_free(&self, resource: &str, start: Ms, end: Ms) -> Result<bool, StoreError> {
        let span = validate_interval(start, end)?;
        let schedule = self
            .schedules
            .get(resource)
            .ok_or_else(|| StoreError::UnknownResource(resource.to_string()))?;
        match check_no_conflict(&schedule, &span) {
            Ok(()) => Ok(true),
            Err(StoreError::SlotConflict(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Total bookings across all resources.
    pub fn booking_count(&self) -> usize {
        self.schedules.iter().map(|e| e.value().len()).sum()
    }
}
