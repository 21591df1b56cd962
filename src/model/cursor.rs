pub const CURSOR_CLASS: &str = "custom-cursor";

/// Inline style of the follower dot.
pub const CURSOR_STYLE: &str = "position: fixed; width: 20px; height: 20px; \
    background: var(--primary-color); border-radius: 50%; pointer-events: none; \
    z-index: 9999; transition: transform 0.1s ease; transform: translate(-50%, -50%);";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorLook {
    pub transform: &'static str,
    pub opacity: &'static str,
}

/// The dot doubles and fades while over a link, button or card.
pub fn look(over_interactive: bool) -> CursorLook {
    if over_interactive {
        CursorLook {
            transform: "translate(-50%, -50%) scale(2)",
            opacity: "0.5",
        }
    } else {
        CursorLook {
            transform: "translate(-50%, -50%) scale(1)",
            opacity: "1",
        }
    }
}

/// `left`/`top` values that centre the dot on the pointer.
pub fn position(client_x: i32, client_y: i32) -> (String, String) {
    (format!("{}px", client_x), format!("{}px", client_y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_over_interactive_elements() {
        assert_eq!(look(true).transform, "translate(-50%, -50%) scale(2)");
        assert_eq!(look(true).opacity, "0.5");
        assert_eq!(look(false).transform, "translate(-50%, -50%) scale(1)");
        assert_eq!(look(false).opacity, "1");
    }

    #[test]
    fn follows_the_pointer() {
        assert_eq!(position(12, 340), ("12px".to_string(), "340px".to_string()));
    }

    #[test]
    fn base_style_keeps_the_dot_centred() {
        assert!(CURSOR_STYLE.contains("position: fixed"));
        assert!(CURSOR_STYLE.ends_with("transform: translate(-50%, -50%);"));
        assert!(CURSOR_STYLE.contains("pointer-events: none"));
    }
}
