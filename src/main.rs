use tracing::info;

use boxbook::config::ConfigError;
use boxbook::model::{now_ms, Ms};
use boxbook::{ReservationStore, StoreConfig};

const HOUR: Ms = 3_600_000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    boxbook::observability::init_tracing();

    let config = StoreConfig::from_env()?;
    let store = ReservationStore::from_config(&config);
    info!("boxbook demo");
    info!("  resources: {}", store.resources().join(", "));

    let owner = std::env::var("BOXBOOK_DEMO_OWNER").unwrap_or_else(|_| "alice".into());
    let resource = match std::env::var("BOXBOOK_DEMO_BOX") {
        Ok(name) => name,
        Err(_) => store
            .resources()
            .first()
            .cloned()
            .ok_or(ConfigError::NoResources)?,
    };

    let now = now_ms()?;
    let booking = store.reserve(owner, &resource, now, now + HOUR)?;
    info!("reserved {resource} for {} [{}, {})", booking.owner, booking.start, booking.end);

    let schedule = store.schedule_for_resource(&resource)?;
    println!("{}", serde_json::to_string_pretty(&schedule)?);
    Ok(())
}
