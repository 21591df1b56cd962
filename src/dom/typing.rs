use gloo_timers::callback::Interval;

use super::context::{release_later, Installed, Shared};
use crate::error::EnhanceError;
use crate::model::typing::Typewriter;

/// Clears the hero title and types it back in, one character per tick.
pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let Some(title) = ctx.bindings.hero_title.clone() else {
        return Ok(Installed::default());
    };
    let text = title.text_content().unwrap_or_default();
    let mut typewriter = Typewriter::new(&text);
    if typewriter.is_done() {
        return Ok(Installed::default());
    }

    let char_ms = ctx.config.typing_char_ms;
    log::debug!(
        "typing hero title over {}ms",
        typewriter.duration_ms(char_ms)
    );
    title.set_text_content(Some(""));

    let timer = {
        let ctx = ctx.clone();
        Interval::new(char_ms, move || {
            let frame = typewriter.step();
            title.set_text_content(Some(&frame.text));
            if frame.done {
                let timer = ctx.typing_timer.borrow_mut().take();
                if let Some(timer) = timer {
                    release_later(timer);
                }
            }
        })
    };
    *ctx.typing_timer.borrow_mut() = Some(timer);
    Ok(Installed::default())
}
