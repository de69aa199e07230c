use tokio::time::{interval, Duration};

use crate::limiter::rate_limiter::LoginThrottle;

pub async fn start_throttle_eviction(throttle: LoginThrottle, every: Duration) {
    let mut interval = interval(every);

    loop {
        interval.tick().await;

        let purged = throttle.purge_stale();
        if purged > 0 {
            tracing::info!("Evicted {} stale login throttle entries", purged);
        }
    }
}
