use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

/// Minimum spacing between accepted calls.
///
/// A rejected call does not move the window.
#[derive(Debug)]
pub struct Cooldown {
    window: Duration,
    last: Mutex<Option<Instant>>,
}

impl Cooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: Mutex::new(None),
        }
    }

    /// Accept the call if the window since the last accepted call has elapsed
    pub fn try_acquire(&self) -> bool {
        let now = Instant::now();
        let mut last = self.last.lock();
        match *last {
            Some(previous) if now.duration_since(previous) < self.window => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_calls_inside_window_are_rejected() {
        let cooldown = Cooldown::new(Duration::from_millis(200));
        assert!(cooldown.try_acquire());
        assert!(!cooldown.try_acquire());

        tokio::time::advance(Duration::from_millis(150)).await;
        assert!(!cooldown.try_acquire());

        // Measured from the last accepted call, not the rejected ones
        tokio::time::advance(Duration::from_millis(50)).await;
        assert!(cooldown.try_acquire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_window_never_rejects() {
        let cooldown = Cooldown::new(Duration::ZERO);
        assert!(cooldown.try_acquire());
        assert!(cooldown.try_acquire());
    }
}
