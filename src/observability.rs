use tracing_subscriber::EnvFilter;

/// Counter: reserve calls. Labels: status.
pub const RESERVATIONS_TOTAL: &str = "boxbook_reservations_total";

/// Counter: cancel calls. Labels: status.
pub const CANCELLATIONS_TOTAL: &str = "boxbook_cancellations_total";

/// Gauge: bookings currently held across all resources.
/// Process-wide: every `ReservationStore` in the process adds to the same gauge.
pub const BOOKINGS_ACTIVE: &str = "boxbook_bookings_active";

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
