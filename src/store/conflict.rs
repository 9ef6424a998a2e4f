use crate::model::*;

use super::StoreError;

pub(crate) fn validate_interval(start: Ms, end: Ms) -> Result<Span, StoreError> {
    if start >= end {
        return Err(StoreError::InvalidInterval { start, end });
    }
    Ok(Span::new(start, end))
}

pub(crate) fn check_no_conflict(schedule: &Schedule, span: &Span) -> Result<(), StoreError> {
    match schedule.overlapping(span).next() {
        Some(existing) => Err(StoreError::SlotConflict(existing.clone())),
        None => Ok(()),
    }
}
