/// Trailing-edge throttle driven by an injected clock. A burst of calls
/// collapses into one run `wait_ms` after the last call, carrying the last
/// call's argument.
#[derive(Debug, Clone)]
pub struct TrailingThrottle<T> {
    wait_ms: i64,
    pending: Option<(i64, T)>,
}

impl<T> TrailingThrottle<T> {
    pub fn new(wait_ms: u32) -> Self {
        Self {
            wait_ms: i64::from(wait_ms),
            pending: None,
        }
    }

    /// Records a call at `now`, superseding any pending one, and returns the
    /// instant the trailing run becomes due.
    pub fn call(&mut self, now: i64, arg: T) -> i64 {
        let due = now + self.wait_ms;
        self.pending = Some((due, arg));
        due
    }

    /// Takes the pending argument once `now` reaches its due instant.
    pub fn poll(&mut self, now: i64) -> Option<T> {
        match self.pending {
            Some((due, _)) if now >= due => self.pending.take().map(|(_, arg)| arg),
            _ => None,
        }
    }
}
