pub const LOADING_CLASS: &str = "loading";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitState {
    Idle,
    /// Busy until the given epoch millisecond.
    Busy(i64),
}

/// Busy/idle state of one form's submit control.
#[derive(Debug, Clone)]
pub struct SubmitFeedback {
    delay_ms: u32,
    state: SubmitState,
}

impl SubmitFeedback {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            state: SubmitState::Idle,
        }
    }

    /// Starts a simulated submission at `now` and returns when it completes.
    /// `None` when one is already running.
    pub fn begin(&mut self, now: i64) -> Option<i64> {
        match self.state {
            SubmitState::Idle => {
                let complete_at = now + i64::from(self.delay_ms);
                self.state = SubmitState::Busy(complete_at);
                Some(complete_at)
            }
            SubmitState::Busy(_) => None,
        }
    }

    /// Ends the simulated submission. `false` if nothing was running.
    pub fn complete(&mut self) -> bool {
        match self.state {
            SubmitState::Busy(_) => {
                self.state = SubmitState::Idle;
                true
            }
            SubmitState::Idle => false,
        }
    }
}

/// Milliseconds left until `at`, never negative.
pub fn delay_until(now: i64, at: i64) -> u32 {
    u32::try_from((at - now).max(0)).unwrap_or(u32::MAX)
}

/// Buttons that get a temporary loading state on click: placeholder `#`
/// links and links leaving the site.
pub fn button_shows_loading(href: Option<&str>) -> bool {
    matches!(href, Some(href) if href == "#" || href.starts_with("http"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnhanceConfig;

    #[test]
    fn submit_cycle() {
        let mut feedback = SubmitFeedback::new(2000);
        assert!(!feedback.complete());
        assert!(feedback.begin(0).is_some());
        assert_eq!(feedback.state, SubmitState::Busy(2000));
        assert_eq!(feedback.begin(500), None);
        assert!(feedback.complete());
        assert_eq!(feedback.state, SubmitState::Idle);
        assert!(!feedback.complete());
    }

    #[test]
    fn completes_exactly_two_seconds_later() {
        let config = EnhanceConfig::default();
        let mut feedback = SubmitFeedback::new(config.submit_delay_ms);
        let now = 1_700_000_000_123;
        let complete_at = feedback.begin(now).unwrap();
        assert_eq!(complete_at - now, 2000);
        assert_eq!(delay_until(now, complete_at), 2000);

        // A rejected double submit does not move the completion time.
        assert_eq!(feedback.begin(now + 1_500), None);
        assert!(feedback.complete());
        assert_eq!(feedback.begin(complete_at), Some(complete_at + 2000));
    }

    #[test]
    fn delay_never_goes_negative() {
        assert_eq!(delay_until(5_000, 4_000), 0);
        assert_eq!(delay_until(0, 250), 250);
    }

    #[test]
    fn loading_buttons() {
        assert!(button_shows_loading(Some("#")));
        assert!(button_shows_loading(Some("https://shop.example.com")));
        assert!(!button_shows_loading(Some("#features")));
        assert!(!button_shows_loading(Some("/about")));
        assert!(!button_shows_loading(None));
    }
}
