//! Scroll, reveal, hover, countdown, lazy-load and form enhancements for the
//! Furnitor marketing pages.
//!
//! Pure decision logic lives in [`model`]; [`dom`] binds it to a real page.
//! JavaScript sees the `initEnhancements`, `initAnimations`,
//! `initScrollEffects` and `throttle` exports, and `initEnhancements` also
//! publishes the last three as `window.Furnitor`.

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Function, Object, Reflect};

pub mod config;
pub mod error;

pub mod model {
    pub mod countdown;
    pub mod cursor;
    pub mod form;
    pub mod hover;
    pub mod lazy;
    pub mod menu;
    pub mod page;
    pub mod reveal;
    pub mod scroll;
    pub mod sections;
    pub mod throttle;
    pub mod typing;
}

pub mod dom {
    pub mod bindings;
    pub mod context;
    pub mod countdown;
    pub mod cursor;
    pub mod form;
    pub mod hover;
    pub mod lazy;
    pub mod listener;
    pub mod navigation;
    pub mod reveal;
    pub mod scroll;
    pub mod throttle;
    pub mod typing;
}

use config::{EnhanceConfig, CONFIG_SCRIPT_ID};
use dom::bindings::PageBindings;
use dom::context::{Context, Installed, Shared};
use dom::listener::{EventListener, Mounted, Observer};
use dom::scroll::ScrollEffects;
use dom::throttle::Throttle;
use error::EnhanceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    ScrollEffects,
    SectionTracking,
    SmoothScroll,
    MobileMenu,
    Reveal,
    Hover,
    ButtonLoading,
    Countdown,
    LazyImages,
    Forms,
    /// Opt-in: a dot following the pointer. Not part of [`Feature::ALL`].
    CustomCursor,
    /// Opt-in: types the hero title out. Not part of [`Feature::ALL`].
    TypingAnimation,
}

impl Feature {
    pub const ALL: [Feature; 10] = [
        Feature::ScrollEffects,
        Feature::SectionTracking,
        Feature::SmoothScroll,
        Feature::MobileMenu,
        Feature::Reveal,
        Feature::Hover,
        Feature::ButtonLoading,
        Feature::Countdown,
        Feature::LazyImages,
        Feature::Forms,
    ];

    fn name(self) -> &'static str {
        match self {
            Feature::ScrollEffects => "scroll effects",
            Feature::SectionTracking => "section tracking",
            Feature::SmoothScroll => "smooth scrolling",
            Feature::MobileMenu => "mobile menu",
            Feature::Reveal => "reveal animations",
            Feature::Hover => "hover effects",
            Feature::ButtonLoading => "button loading states",
            Feature::Countdown => "countdowns",
            Feature::LazyImages => "lazy images",
            Feature::Forms => "form handling",
            Feature::CustomCursor => "custom cursor",
            Feature::TypingAnimation => "typing animation",
        }
    }
}

/// Everything installed on a page. Dropping it detaches all listeners,
/// disconnects observers, stops the timers and removes added elements.
pub struct Enhancements {
    ctx: Shared,
    listeners: Vec<EventListener>,
    observers: Vec<Observer>,
    mounted: Vec<Mounted>,
}

impl Enhancements {
    /// Queries the current document and installs `features` on it. A feature
    /// that fails to install is logged and skipped; the rest still run.
    pub fn install(config: EnhanceConfig, features: &[Feature]) -> Result<Self, EnhanceError> {
        let bindings = PageBindings::from_window()?;
        let ctx = Context::new(bindings, config);
        let mut enhancements = Self {
            ctx,
            listeners: Vec::new(),
            observers: Vec::new(),
            mounted: Vec::new(),
        };

        // Both scroll features share one listener.
        let wanted = ScrollEffects {
            navbar: features.contains(&Feature::ScrollEffects),
            active_link: features.contains(&Feature::SectionTracking),
        };
        if wanted.navbar || wanted.active_link {
            let result = dom::scroll::install(&enhancements.ctx, wanted);
            enhancements.attach("scroll", result);
        }

        for &feature in features {
            let ctx = &enhancements.ctx;
            let result = match feature {
                Feature::ScrollEffects | Feature::SectionTracking => continue,
                Feature::SmoothScroll => dom::navigation::install_smooth_scroll(ctx),
                Feature::MobileMenu => dom::navigation::install_mobile_menu(ctx),
                Feature::Reveal => dom::reveal::install(ctx),
                Feature::Hover => dom::hover::install(ctx),
                Feature::ButtonLoading => dom::form::install_button_loading(ctx),
                Feature::Countdown => dom::countdown::install(ctx),
                Feature::LazyImages => dom::lazy::install(ctx),
                Feature::Forms => dom::form::install_forms(ctx),
                Feature::CustomCursor => dom::cursor::install(ctx),
                Feature::TypingAnimation => dom::typing::install(ctx),
            };
            enhancements.attach(feature.name(), result);
        }

        info!(
            "enhancements ready: {} listeners, {} observers",
            enhancements.listeners.len(),
            enhancements.observers.len()
        );
        Ok(enhancements)
    }

    fn attach(&mut self, name: &str, result: Result<Installed, EnhanceError>) {
        match result {
            Ok(installed) => {
                self.listeners.extend(installed.listeners);
                self.observers.extend(installed.observers);
                self.mounted.extend(installed.mounted);
            }
            Err(err) => warn!("skipping {}: {}", name, err),
        }
    }
}

impl Drop for Enhancements {
    fn drop(&mut self) {
        self.ctx.countdown_timers.borrow_mut().clear();
        self.ctx.typing_timer.borrow_mut().take();
        self.observers.clear();
        self.listeners.clear();
        self.mounted.clear();
    }
}

/// Config from the page's `#furnitor-config` JSON block, or the defaults.
pub fn page_config() -> EnhanceConfig {
    let raw = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) => EnhanceConfig::from_json(&raw).unwrap_or_else(|err| {
            warn!("ignoring #{}: {}", CONFIG_SCRIPT_ID, err);
            EnhanceConfig::default()
        }),
        None => EnhanceConfig::default(),
    }
}

/// Config passed from JavaScript. `None` when no options were given, in
/// which case the page block is read at install time.
fn options_config(options: JsValue) -> Result<Option<EnhanceConfig>, EnhanceError> {
    if options.is_undefined() || options.is_null() {
        return Ok(None);
    }
    let config: EnhanceConfig = serde_wasm_bindgen::from_value(options)?;
    config.validate().map(Some)
}

fn init_runtime() {
    console_error_panic_hook::set_once();
    // Several exports may run on one page; only the first logger sticks.
    let _ = console_log::init_with_level(config::log_level());
}

fn install_for_page(config: Option<EnhanceConfig>, features: &[Feature]) -> Result<(), EnhanceError> {
    let config = config.unwrap_or_else(page_config);
    let enhancements = Enhancements::install(config, features)?;
    // Lives as long as the page.
    std::mem::forget(enhancements);
    Ok(())
}

/// Publishes `initAnimations`, `initScrollEffects` and `throttle` as
/// `window.Furnitor`.
fn expose_namespace(window: &web_sys::Window) -> Result<(), EnhanceError> {
    let namespace = Object::new();
    let animations = Closure::wrap(Box::new(init_animations) as Box<dyn Fn() -> Result<(), JsValue>>);
    let scroll_effects =
        Closure::wrap(Box::new(init_scroll_effects) as Box<dyn Fn() -> Result<(), JsValue>>);
    let throttled = Closure::wrap(Box::new(throttle) as Box<dyn Fn(Function, u32) -> Function>);

    Reflect::set(&namespace, &"initAnimations".into(), &animations.into_js_value())?;
    Reflect::set(&namespace, &"initScrollEffects".into(), &scroll_effects.into_js_value())?;
    Reflect::set(&namespace, &"throttle".into(), &throttled.into_js_value())?;
    Reflect::set(window, &"Furnitor".into(), &namespace)?;
    Ok(())
}

/// Installs every enhancement. `options` may override any config field;
/// invalid options are rejected before anything is installed.
#[wasm_bindgen(js_name = initEnhancements)]
pub fn init_enhancements(options: JsValue) -> Result<(), JsValue> {
    init_runtime();
    let config = options_config(options)?;
    let features = Feature::ALL;
    let window = web_sys::window().ok_or(EnhanceError::MissingWindow)?;
    let document = window.document().ok_or(EnhanceError::MissingDocument)?;
    expose_namespace(&window)?;

    if document.ready_state() == "loading" {
        let once = Closure::once(move || {
            if let Err(err) = install_for_page(config, &features) {
                warn!("enhancements failed: {}", err);
            }
        });
        document.add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())?;
        once.forget();
        return Ok(());
    }
    Ok(install_for_page(config, &features)?)
}

#[wasm_bindgen(js_name = initAnimations)]
pub fn init_animations() -> Result<(), JsValue> {
    init_runtime();
    Ok(install_for_page(None, &[Feature::Reveal])?)
}

#[wasm_bindgen(js_name = initScrollEffects)]
pub fn init_scroll_effects() -> Result<(), JsValue> {
    init_runtime();
    Ok(install_for_page(None, &[Feature::ScrollEffects])?)
}

/// Wraps `func` so it only runs once calls have paused for `wait` ms. The
/// last call's first argument is forwarded.
#[wasm_bindgen]
pub fn throttle(func: Function, wait: u32) -> Function {
    let throttled = Throttle::new(wait, move |arg: JsValue| {
        if let Err(err) = func.call1(&JsValue::NULL, &arg) {
            warn!("throttled function threw: {:?}", err);
        }
    });
    let wrapper = Closure::wrap(Box::new(move |arg: JsValue| throttled.call(arg)) as Box<dyn FnMut(JsValue)>);
    wrapper.into_js_value().unchecked_into()
}
