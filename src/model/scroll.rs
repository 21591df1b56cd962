/// How the navbar should look for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarState {
    Top,
    Scrolled,
}

impl NavbarState {
    pub fn for_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            NavbarState::Scrolled
        } else {
            NavbarState::Top
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NavbarState::Top => "rgba(255, 255, 255, 0.95)",
            NavbarState::Scrolled => "rgba(255, 255, 255, 0.98)",
        }
    }

    pub fn box_shadow(self) -> &'static str {
        match self {
            NavbarState::Top => "none",
            NavbarState::Scrolled => "0 2px 20px rgba(0, 0, 0, 0.1)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
    Still,
}

/// Everything the page needs to repaint after one scroll signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFrame {
    pub navbar: NavbarState,
    /// Hero translation in px, `None` when the page has no hero.
    pub parallax: Option<f64>,
    pub direction: ScrollDirection,
}

#[derive(Debug, Clone)]
pub struct ScrollTracker {
    threshold: f64,
    parallax_factor: f64,
    has_hero: bool,
    last_scroll_top: f64,
}

impl ScrollTracker {
    pub fn new(threshold: f64, parallax_factor: f64, has_hero: bool) -> Self {
        Self {
            threshold,
            parallax_factor,
            has_hero,
            last_scroll_top: 0.0,
        }
    }

    pub fn update(&mut self, scroll_top: f64) -> ScrollFrame {
        // Overscroll on some browsers reports negative offsets.
        let scroll_top = scroll_top.max(0.0);
        let direction = if scroll_top > self.last_scroll_top {
            ScrollDirection::Down
        } else if scroll_top < self.last_scroll_top {
            ScrollDirection::Up
        } else {
            ScrollDirection::Still
        };
        self.last_scroll_top = scroll_top;

        ScrollFrame {
            navbar: NavbarState::for_offset(scroll_top, self.threshold),
            parallax: self
                .has_hero
                .then(|| scroll_top * self.parallax_factor),
            direction,
        }
    }
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateY({}px)", offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_switches_strictly_above_threshold() {
        assert_eq!(NavbarState::for_offset(0.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::for_offset(100.0, 100.0), NavbarState::Top);
        assert_eq!(NavbarState::for_offset(101.0, 100.0), NavbarState::Scrolled);
        assert_eq!(NavbarState::for_offset(5000.0, 100.0), NavbarState::Scrolled);
    }

    #[test]
    fn navbar_styles() {
        assert_eq!(NavbarState::Top.box_shadow(), "none");
        assert_eq!(NavbarState::Scrolled.background(), "rgba(255, 255, 255, 0.98)");
    }

    #[test]
    fn parallax_is_half_the_offset() {
        let mut tracker = ScrollTracker::new(100.0, 0.5, true);
        let frame = tracker.update(240.0);
        assert_eq!(frame.parallax, Some(120.0));
        assert_eq!(frame.navbar, NavbarState::Scrolled);
        assert_eq!(parallax_transform(120.0), "translateY(120px)");
    }

    #[test]
    fn no_hero_means_no_parallax() {
        let mut tracker = ScrollTracker::new(100.0, 0.5, false);
        assert_eq!(tracker.update(240.0).parallax, None);
    }

    #[test]
    fn tracks_direction() {
        let mut tracker = ScrollTracker::new(100.0, 0.5, true);
        assert_eq!(tracker.update(50.0).direction, ScrollDirection::Down);
        assert_eq!(tracker.update(50.0).direction, ScrollDirection::Still);
        assert_eq!(tracker.update(10.0).direction, ScrollDirection::Up);
        assert_eq!(tracker.update(-30.0).navbar, NavbarState::Top);
    }
}
