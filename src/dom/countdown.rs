use gloo_timers::callback::Interval;

use super::context::{apply, Installed, Shared};
use crate::error::EnhanceError;
use crate::model::countdown::now_ms;
use crate::model::page::PageSignals;

fn tick(ctx: &Shared, element: usize) {
    let effects = ctx.model.borrow_mut().on_tick(element, now_ms());
    for effect in effects {
        apply(ctx, effect, None);
    }
}

/// Renders every countdown immediately, then once per tick until it expires.
pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let count = ctx.bindings.countdowns.len();
    let mut timers = Vec::with_capacity(count);
    for element in 0..count {
        let timer = {
            let ctx = ctx.clone();
            Interval::new(ctx.config.countdown_tick_ms, move || tick(&ctx, element))
        };
        timers.push(Some(timer));
    }
    *ctx.countdown_timers.borrow_mut() = timers;

    // First render only after the timers are registered so an already expired
    // countdown can cancel its own.
    for element in 0..count {
        tick(ctx, element);
    }
    if count > 0 {
        log::debug!("started {} countdowns", count);
    }
    Ok(Installed::default())
}
