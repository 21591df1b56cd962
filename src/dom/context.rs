use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::{HtmlElement, IntersectionObserver};

use super::bindings::PageBindings;
use super::listener::{EventListener, Mounted, Observer};
use crate::config::EnhanceConfig;
use crate::model::form::LOADING_CLASS;
use crate::model::lazy::LAZY_CLASS;
use crate::model::page::{Effect, PageModel};
use crate::model::reveal::{VISIBLE_OPACITY, VISIBLE_TRANSFORM};
use crate::model::scroll::parallax_transform;

pub const ACTIVE_CLASS: &str = "active";

/// State shared by every handler on the page.
pub struct Context {
    pub bindings: PageBindings,
    pub model: RefCell<PageModel>,
    pub config: EnhanceConfig,
    pub countdown_timers: RefCell<Vec<Option<Interval>>>,
    pub typing_timer: RefCell<Option<Interval>>,
}

pub type Shared = Rc<Context>;

impl Context {
    pub fn new(bindings: PageBindings, config: EnhanceConfig) -> Shared {
        let model = PageModel::new(bindings.layout(), &config);
        Rc::new(Self {
            bindings,
            model: RefCell::new(model),
            config,
            countdown_timers: RefCell::new(Vec::new()),
            typing_timer: RefCell::new(None),
        })
    }
}

/// What one initializer registered.
#[derive(Default)]
pub struct Installed {
    pub listeners: Vec<EventListener>,
    pub observers: Vec<Observer>,
    pub mounted: Vec<Mounted>,
}

impl Installed {
    pub fn listeners(listeners: Vec<EventListener>) -> Self {
        Self {
            listeners,
            ..Self::default()
        }
    }

    pub fn observer(observer: Observer) -> Self {
        Self {
            observers: vec![observer],
            ..Self::default()
        }
    }
}

/// Stops an interval from a fresh task. It may be the one running the
/// caller, so it cannot be dropped in place.
pub fn release_later(timer: Interval) {
    Timeout::new(0, move || drop(timer)).forget();
}

pub fn set_style(el: &HtmlElement, property: &str, value: &str) {
    let _ = el.style().set_property(property, value);
}

/// Applies one model effect to the page. Intersection-driven effects also
/// stop observing their element when `observer` is given.
pub fn apply(ctx: &Shared, effect: Effect, observer: Option<&IntersectionObserver>) {
    let bindings = &ctx.bindings;
    match effect {
        Effect::Navbar(state) => {
            if let Some(navbar) = &bindings.navbar {
                set_style(navbar, "background", state.background());
                set_style(navbar, "box-shadow", state.box_shadow());
            }
        }
        Effect::HeroOffset(offset) => {
            if let Some(hero) = &bindings.hero {
                set_style(hero, "transform", &parallax_transform(offset));
            }
        }
        Effect::ActiveLink(active) => {
            for (index, link) in bindings.nav_links.iter().enumerate() {
                let _ = link
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, Some(index) == active);
            }
        }
        Effect::Reveal(step) => {
            let Some(el) = bindings.reveal_targets.get(step.element).cloned() else {
                return;
            };
            if let Some(observer) = observer {
                observer.unobserve(&el);
            }
            if step.delay_ms == 0 {
                show(&el);
            } else {
                Timeout::new(step.delay_ms, move || show(&el)).forget();
            }
        }
        Effect::LoadImage { image, src } => {
            if let Some(img) = bindings.lazy_images.get(image) {
                img.set_src(&src);
                let _ = img.class_list().remove_1(LAZY_CLASS);
                if let Some(observer) = observer {
                    observer.unobserve(img);
                }
                log::debug!("lazy image {} loaded from {}", image, src);
            }
        }
        Effect::RenderCountdown { element, text } => {
            if let Some(el) = bindings.countdowns.get(element) {
                el.set_text_content(Some(&text));
            }
        }
        Effect::StopCountdown(element) => {
            let timer = ctx
                .countdown_timers
                .borrow_mut()
                .get_mut(element)
                .and_then(Option::take);
            if let Some(timer) = timer {
                release_later(timer);
            }
            log::info!("countdown {} expired", element);
        }
    }
}

fn show(el: &HtmlElement) {
    let _ = el.class_list().add_1(LOADING_CLASS);
    set_style(el, "opacity", VISIBLE_OPACITY);
    set_style(el, "transform", VISIBLE_TRANSFORM);
}
