use once_cell::sync::OnceCell;
use std::time::Duration;
use tracing::{debug, info};

/// Process-wide ceiling for one scrape pass. Set once, before any network activity.
static MAX_EXECUTION_TIME: OnceCell<Duration> = OnceCell::new();

pub const DEFAULT_MAX_EXECUTION_TIME: Duration = Duration::from_secs(300);

/// Apply the allowance. Only the first call takes effect; the value in force is returned.
pub fn set_max_execution_time(limit: Duration) -> Duration {
    match MAX_EXECUTION_TIME.set(limit) {
        Ok(()) => info!("Max execution time set to {:?}", limit),
        Err(_) => debug!("Max execution time already set, ignoring {:?}", limit),
    }
    max_execution_time()
}

pub fn max_execution_time() -> Duration {
    MAX_EXECUTION_TIME
        .get()
        .copied()
        .unwrap_or(DEFAULT_MAX_EXECUTION_TIME)
}
