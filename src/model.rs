use std::cmp::Ordering;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Unix milliseconds. The only time type.
pub type Ms = i64;

/// Current wall-clock time. Fails if the system clock reads before the epoch.
pub fn now_ms() -> Result<Ms, SystemTimeError> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_millis() as Ms)
}

/// Half-open interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: Ms,
    pub end: Ms,
}

impl Span {
    pub fn new(start: Ms, end: Ms) -> Self {
        debug_assert!(start < end, "Span start must be before end");
        Self { start, end }
    }

    /// Touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// A reservation of one resource by one owner.
///
/// Equality covers every field. Ordering is by `start` only and goes through
/// [`Booking::cmp_by_start`]; there is no `Ord` impl so the two are never mixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Booking {
    pub start: Ms,
    pub end: Ms,
    pub owner: String,
}

impl Booking {
    pub fn new(owner: impl Into<String>, start: Ms, end: Ms) -> Self {
        Self {
            start,
            end,
            owner: owner.into(),
        }
    }

    fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }

    pub fn overlaps(&self, other: &Booking) -> bool {
        self.span().overlaps(&other.span())
    }

    pub fn cmp_by_start(&self, other: &Booking) -> Ordering {
        self.start.cmp(&other.start)
    }
}

/// Bookings of one resource, sorted by `start`, pairwise non-overlapping.
///
/// Only the store mutates a schedule; it checks the interval and overlap before
/// calling `insert`.
#[derive(Debug, Clone, Default)]
pub struct Schedule {
    bookings: Vec<Booking>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Insert after any entries with an equal start.
    pub(crate) fn insert(&mut self, booking: Booking) {
        let pos = self
            .bookings
            .partition_point(|b| b.cmp_by_start(&booking) != Ordering::Greater);
        self.bookings.insert(pos, booking);
    }

    /// Remove the first entry value-equal to `booking`.
    pub(crate) fn remove(&mut self, booking: &Booking) -> Option<Booking> {
        let pos = self.bookings.iter().position(|b| b == booking)?;
        Some(self.bookings.remove(pos))
    }

    /// Return only bookings whose span overlaps the query window.
    /// Uses binary search to skip bookings starting at or after `query.end`.
    pub fn overlapping(&self, query: &Span) -> impl Iterator<Item = &Booking> {
        let right_bound = self.bookings.partition_point(|b| b.start < query.end);
        self.bookings[..right_bound]
            .iter()
            .filter(move |b| b.end > query.start)
    }
}
