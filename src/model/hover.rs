/// A transform to apply on pointer enter or leave. Leave restores the neutral
/// transform and keeps whatever transition enter installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverStyle {
    pub transform: &'static str,
    pub transition: Option<&'static str>,
}

pub fn card(hovered: bool) -> HoverStyle {
    if hovered {
        HoverStyle {
            transform: "translateY(-10px) scale(1.02)",
            transition: Some("all 0.3s cubic-bezier(0.4, 0.0, 0.2, 1)"),
        }
    } else {
        HoverStyle {
            transform: "translateY(0) scale(1)",
            transition: None,
        }
    }
}

pub fn tech_icon(hovered: bool) -> HoverStyle {
    if hovered {
        HoverStyle {
            transform: "scale(1.3) rotate(10deg)",
            transition: Some("all 0.3s ease"),
        }
    } else {
        HoverStyle {
            transform: "scale(1) rotate(0deg)",
            transition: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_lifts_and_returns() {
        assert_eq!(card(true).transform, "translateY(-10px) scale(1.02)");
        assert_eq!(card(false).transform, "translateY(0) scale(1)");
        assert!(card(false).transition.is_none());
    }

    #[test]
    fn icon_spins_and_returns() {
        assert_eq!(tech_icon(true).transform, "scale(1.3) rotate(10deg)");
        assert_eq!(tech_icon(false).transform, "scale(1) rotate(0deg)");
    }
}
