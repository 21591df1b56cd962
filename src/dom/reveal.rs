use super::bindings::index_of;
use super::context::{apply, set_style, Installed, Shared};
use super::listener::Observer;
use crate::error::EnhanceError;
use crate::model::page::{PageSignals, Target};
use crate::model::reveal::{HIDDEN_OPACITY, HIDDEN_TRANSFORM, REVEAL_TRANSITION};

/// Hides every reveal candidate right away, then reveals each on its first
/// intersection.
pub fn install(ctx: &Shared) -> Result<Installed, EnhanceError> {
    let targets = &ctx.bindings.reveal_targets;
    if targets.is_empty() {
        return Ok(Installed::default());
    }

    // Applied before observing so final-state content never flashes.
    for el in targets {
        set_style(el, "opacity", HIDDEN_OPACITY);
        set_style(el, "transform", HIDDEN_TRANSFORM);
        set_style(el, "transition", REVEAL_TRANSITION);
    }

    let observer = {
        let ctx = ctx.clone();
        Observer::new(
            Some(ctx.config.reveal_threshold),
            Some(&ctx.config.reveal_root_margin()),
            move |entry, observer| {
                let Some(element) = index_of(&ctx.bindings.reveal_targets, &entry.target()) else {
                    return;
                };
                let effects = ctx
                    .model
                    .borrow_mut()
                    .on_intersect(Target::Reveal(element), entry.is_intersecting());
                for effect in effects {
                    apply(&ctx, effect, Some(observer));
                }
            },
        )?
    };

    for el in targets {
        observer.observe(el);
    }
    log::debug!("observing {} reveal targets", targets.len());
    Ok(Installed::observer(observer))
}
