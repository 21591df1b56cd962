pub const SHOW_CLASS: &str = "show";

/// Body `overflow` while the mobile menu is open or closed.
pub fn body_overflow(menu_open: bool) -> &'static str {
    if menu_open {
        "hidden"
    } else {
        ""
    }
}

/// Nav-link clicks collapse the menu only on narrow viewports.
pub fn collapses_on_link_click(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width < breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_follows_menu() {
        assert_eq!(body_overflow(true), "hidden");
        assert_eq!(body_overflow(false), "");
    }

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(collapses_on_link_click(375.0, 992.0));
        assert!(collapses_on_link_click(991.0, 992.0));
        assert!(!collapses_on_link_click(992.0, 992.0));
    }
}
