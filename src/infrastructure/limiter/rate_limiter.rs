use std::{
    collections::VecDeque,
    sync::Arc,
    time::{Duration, Instant},
};
use dashmap::DashMap;
use parking_lot::Mutex;

/// Failed login attempts of one client inside the sliding window.
#[derive(Debug)]
struct FailureWindow {
    attempts: VecDeque<Instant>,
    last_seen: Instant,
}

impl FailureWindow {
    fn new() -> Self {
        Self {
            attempts: VecDeque::new(),
            last_seen: Instant::now(),
        }
    }

    /// Drops attempts that slid out of the window.
    fn prune(&mut self, now: Instant, window: Duration) {
        while let Some(oldest) = self.attempts.front() {
            if now.duration_since(*oldest) >= window {
                self.attempts.pop_front();
            } else {
                break;
            }
        }
    }
}

type Key = String;

/// Per-client throttle for admin logins.
#[derive(Clone)]
pub struct LoginThrottle {
    map: Arc<DashMap<Key, Arc<Mutex<FailureWindow>>>>,
    limit: usize,
    window: Duration,
}

impl LoginThrottle {
    pub fn new(limit: u32, window: Duration) -> Self {
        Self {
            map: Arc::new(DashMap::new()),
            limit: limit as usize,
            window,
        }
    }

    fn get_window(&self, key: &str) -> Arc<Mutex<FailureWindow>> {
        if let Some(existing) = self.map.get(key) {
            existing.clone()
        } else {
            self.map
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(Mutex::new(FailureWindow::new())))
                .clone()
        }
    }

    /// Seconds the client must wait before trying again, `None` when allowed.
    pub fn retry_after(&self, key: &str) -> Option<u64> {
        let entry = self.map.get(key)?.clone();
        let mut window = entry.lock();
        let now = Instant::now();
        window.prune(now, self.window);

        if window.attempts.len() < self.limit {
            return None;
        }

        let oldest = *window.attempts.front()?;
        let remaining = self.window.saturating_sub(now.duration_since(oldest));
        Some(remaining.as_secs().max(1))
    }

    pub fn record_failure(&self, key: &str) {
        let entry = self.get_window(key);
        let mut window = entry.lock();
        let now = Instant::now();
        window.prune(now, self.window);
        window.attempts.push_back(now);
        window.last_seen = now;
    }

    pub fn reset(&self, key: &str) {
        self.map.remove(key);
    }

    /// Removes clients whose last failure left the window, returns how many.
    pub fn purge_stale(&self) -> usize {
        let now = Instant::now();
        let keys_to_remove: Vec<Key> = self.map
            .iter()
            .filter_map(|entry| {
                let window = entry.value().lock();
                if now.duration_since(window.last_seen) >= self.window {
                    Some(entry.key().clone())
                } else {
                    None
                }
            })
            .collect();

        for key in &keys_to_remove {
            self.map.remove(key);
        }
        keys_to_remove.len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.map.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_after_limit_is_reached() {
        let throttle = LoginThrottle::new(2, Duration::from_secs(60));

        assert_eq!(throttle.retry_after("10.0.0.1"), None);
        throttle.record_failure("10.0.0.1");
        assert_eq!(throttle.retry_after("10.0.0.1"), None);
        throttle.record_failure("10.0.0.1");

        let wait = throttle.retry_after("10.0.0.1").unwrap();
        assert!((1..=60).contains(&wait));
        assert_eq!(throttle.retry_after("10.0.0.2"), None);
    }

    #[test]
    fn reset_clears_failures() {
        let throttle = LoginThrottle::new(1, Duration::from_secs(60));
        throttle.record_failure("client");
        assert!(throttle.retry_after("client").is_some());

        throttle.reset("client");
        assert_eq!(throttle.retry_after("client"), None);
    }

    #[test]
    fn purge_drops_expired_clients() {
        let throttle = LoginThrottle::new(3, Duration::ZERO);
        throttle.record_failure("a");
        throttle.record_failure("b");

        assert_eq!(throttle.purge_stale(), 2);
        assert_eq!(throttle.tracked_clients(), 0);
    }
}
