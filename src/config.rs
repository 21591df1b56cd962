use log::Level;
use serde::Deserialize;

use crate::error::EnhanceError;

/// Id of the optional `<script type="application/json">` block a page can use
/// to override any of the values below.
pub const CONFIG_SCRIPT_ID: &str = "furnitor-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Tunables for every enhancement. Missing fields fall back to the defaults
/// the site was designed around.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhanceConfig {
    /// Navbar switches to its opaque look once the page is scrolled past this.
    pub navbar_scroll_threshold: f64,
    pub parallax_factor: f64,
    /// How far below the viewport top the active section anchor sits.
    pub section_anchor_offset: f64,
    /// Extra gap left above a section after a nav-link jump.
    pub nav_scroll_padding: f64,
    pub reveal_threshold: f64,
    /// Pixels trimmed off the viewport bottom before a reveal fires.
    pub reveal_bottom_margin: u32,
    pub reveal_stagger_ms: u32,
    pub countdown_tick_ms: u32,
    pub submit_delay_ms: u32,
    pub button_loading_ms: u32,
    pub mobile_breakpoint: f64,
    pub menu_settle_ms: u32,
    /// Hero title typing speed, per character.
    pub typing_char_ms: u32,
    /// Trailing-edge throttle for the scroll handlers. `None` handles every signal.
    pub scroll_throttle_ms: Option<u32>,
    pub submit_message: String,
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 100.0,
            parallax_factor: 0.5,
            section_anchor_offset: 200.0,
            nav_scroll_padding: 20.0,
            reveal_threshold: 0.1,
            reveal_bottom_margin: 50,
            reveal_stagger_ms: 100,
            countdown_tick_ms: 1000,
            submit_delay_ms: 2000,
            button_loading_ms: 2000,
            mobile_breakpoint: 992.0,
            menu_settle_ms: 100,
            typing_char_ms: 100,
            scroll_throttle_ms: None,
            submit_message: "Thank you for your submission!".to_string(),
        }
    }
}

impl EnhanceConfig {
    pub fn from_json(raw: &str) -> Result<Self, EnhanceError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()
    }

    /// Observer root margin, e.g. `0px 0px -50px 0px`.
    pub fn reveal_root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.reveal_bottom_margin)
    }

    pub(crate) fn validate(self) -> Result<Self, EnhanceError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(EnhanceError::InvalidOptions(format!(
                "reveal_threshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if self.countdown_tick_ms == 0 {
            return Err(EnhanceError::InvalidOptions(
                "countdown_tick_ms must be positive".to_string(),
            ));
        }
        if self.typing_char_ms == 0 {
            return Err(EnhanceError::InvalidOptions(
                "typing_char_ms must be positive".to_string(),
            ));
        }
        Ok(self)
    }
}
