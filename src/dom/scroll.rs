use super::context::{apply, Installed, Shared};
use super::listener::EventListener;
use super::throttle::Throttle;
use crate::error::EnhanceError;
use crate::model::page::{Effect, PageSignals};

/// Which scroll-driven effects a listener applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollEffects {
    pub navbar: bool,
    pub active_link: bool,
}

impl ScrollEffects {
    fn wants(self, effect: &Effect) -> bool {
        match effect {
            Effect::Navbar(_) | Effect::HeroOffset(_) => self.navbar,
            Effect::ActiveLink(_) => self.active_link,
            _ => false,
        }
    }
}

fn on_scroll(ctx: &Shared, wanted: ScrollEffects) {
    let scroll_y = ctx.bindings.scroll_y();
    let sections = ctx.bindings.section_boxes();
    let effects = ctx.model.borrow_mut().on_scroll(scroll_y, &sections);
    for effect in effects.into_iter().filter(|e| wanted.wants(e)) {
        apply(ctx, effect, None);
    }
}

pub fn install(ctx: &Shared, wanted: ScrollEffects) -> Result<Installed, EnhanceError> {
    let handler = {
        let ctx = ctx.clone();
        move || on_scroll(&ctx, wanted)
    };

    // Initial paint for pages loaded mid-scroll.
    handler();

    let window = &ctx.bindings.window;
    let listener = match ctx.config.scroll_throttle_ms {
        Some(wait_ms) => {
            log::debug!("throttling scroll handlers to {}ms", wait_ms);
            let throttle = Throttle::new(wait_ms, move |()| handler());
            EventListener::new(window, "scroll", move |_| throttle.call(()))?
        }
        None => EventListener::new(window, "scroll", move |_| handler())?,
    };
    Ok(Installed::listeners(vec![listener]))
}
